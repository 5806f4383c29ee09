//! Типы и логика, общие для фронтенда бэк-офиса маркетплейса.
//!
//! Крейт не зависит от UI-фреймворка: всё, что здесь есть, тестируется
//! обычным `cargo test`.

pub mod domain;
pub mod enums;
pub mod shared;
