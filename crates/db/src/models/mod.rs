//! Row models and request DTOs.
//!
//! Row structs derive `sqlx::FromRow` + `Serialize` and mirror the table
//! columns exactly. DTOs (`New*`) carry only the client-settable fields.

pub mod account;
pub mod entry;
pub mod portion;
pub mod product;

pub use account::Account;
pub use entry::{Entry, NewEntry};
pub use portion::{NewPortion, Portion};
pub use product::{NewProduct, Product};
