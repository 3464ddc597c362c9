mod balance;

pub use balance::YoctoNear;
