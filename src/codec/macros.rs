/// Declares the wire rules of a union enum and implements `Serialize` / `Deserialize`
/// for it through the codec.
///
/// Variants are listed in the order they are tried when decoding. A variant with a
/// payload names its payload type in parentheses; unit variants name none.
///
/// ```ignore
/// impl_tagged_union!(AccessKeyPermission {
///     FunctionCall(FunctionCallPermission) => ExternalKey("FunctionCall"),
///     FullAccess => BareScalar("FullAccess"),
/// });
/// ```
///
/// Generic unions list their parameters, with bounds, in brackets first:
///
/// ```ignore
/// impl_tagged_union!([T: Serialize + DeserializeOwned + 'static] RpcOutcome<T> {
///     Result(T) => ExternalKey("result"),
///     Error(RpcError) => ExternalKey("error"),
/// });
/// ```
///
/// Rules are written as [`MatchRule`](crate::codec::MatchRule) variants without the enum prefix.
#[macro_export]
macro_rules! impl_tagged_union {
    (@decode $variant:ident) => {
        |_| ::core::result::Result::Ok(Self::$variant)
    };

    (@decode $variant:ident $payload:ty) => {
        |payload| $crate::codec::decode_payload::<$payload>(payload).map(Self::$variant)
    };

    (@encode $variant:ident) => {
        |value| match value {
            Self::$variant => Some(::core::result::Result::Ok(None)),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    };

    (@encode $variant:ident $payload:ty) => {
        |value| match value {
            Self::$variant(payload) => Some(::serde_json::to_value(payload).map(Some)),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    };

    (
        [ $( $generics:tt )* ] $union:ident < $( $param:ident ),* >
        { $( $variant:ident $( ( $payload:ty ) )? => $rule:expr ),+ $(,)? }
    ) => {
        impl< $( $generics )* > $crate::codec::TaggedUnion for $union< $( $param ),* > {
            const NAME: &'static str = stringify!($union);

            const VARIANTS: &'static [$crate::codec::Variant<Self>] = &[
                $(
                    $crate::codec::Variant {
                        label: stringify!($variant),
                        rule: {
                            #[allow(unused_imports)]
                            use $crate::codec::MatchRule::*;
                            $rule
                        },
                        decode: $crate::impl_tagged_union!(@decode $variant $( $payload )?),
                        encode: $crate::impl_tagged_union!(@encode $variant $( $payload )?),
                    },
                )+
            ];
        }

        impl< $( $generics )* > ::serde::Serialize for $union< $( $param ),* > {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error> {
                $crate::codec::serialize(self, serializer)
            }
        }

        impl<'de, $( $generics )* > ::serde::Deserialize<'de> for $union< $( $param ),* > {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::core::result::Result<Self, D::Error> {
                $crate::codec::deserialize(deserializer)
            }
        }
    };

    ($union:ident { $( $body:tt )* }) => {
        $crate::impl_tagged_union!([] $union<> { $( $body )* });
    };
}
