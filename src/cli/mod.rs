mod contact;
mod server;

pub use contact::submit;
pub use server::serve;
