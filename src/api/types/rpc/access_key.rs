use crate::api::types::{AccountId, Nonce, PublicKey};
use crate::{impl_tagged_union, YoctoNear};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Grants access to a limited set of methods on a single contract.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCallPermission {
    /// Remaining gas allowance in yoctoNEAR, `None` for unlimited.
    #[serde_as(as = "Option<YoctoNear>")]
    pub allowance: Option<u128>,
    pub receiver_id: AccountId,
    /// An empty list allows every method.
    pub method_names: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessKeyPermission {
    FunctionCall(FunctionCallPermission),
    FullAccess,
}

impl_tagged_union!(AccessKeyPermission {
    FunctionCall(FunctionCallPermission) => ExternalKey("FunctionCall"),
    FullAccess => BareScalar("FullAccess"),
});

/// The view and the stored form share one wire shape.
pub type AccessKeyPermissionView = AccessKeyPermission;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessKey {
    pub nonce: Nonce,
    pub permission: AccessKeyPermission,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessKeyView {
    pub nonce: Nonce,
    pub permission: AccessKeyPermissionView,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessKeyInfoView {
    pub public_key: PublicKey,
    pub access_key: AccessKeyView,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessKeyList {
    pub keys: Vec<AccessKeyInfoView>,
}
