//! Data models for Inventario entities

pub mod celular;
pub mod historico;
pub mod notebook;
pub mod terminal;
pub mod user;

// Re-export commonly used types
pub use celular::Celular;
pub use historico::{Actor, EquipmentType, Historico, HistoricoAction};
pub use notebook::Notebook;
pub use terminal::Terminal;
pub use user::{Perfil, Permissions, User};
