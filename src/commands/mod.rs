//! Server Command Wrappers
//!
//! Everything that talks to something outside the page: the cart
//! endpoint, the notification socket and Bootstrap's modal API.

mod cart;
mod modal;
mod notifications;

pub use cart::*;
pub use modal::*;
pub use notifications::*;
