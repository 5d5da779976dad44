mod register;
pub use register::Register;

mod login;
pub use login::Login;

mod me;
pub use me::Me;
