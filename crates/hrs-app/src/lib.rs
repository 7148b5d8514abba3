// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod contact;
pub mod content;
pub mod inventory;
pub mod model;
pub mod money;
pub mod state;

pub use contact::*;
pub use content::*;
pub use inventory::*;
pub use model::*;
pub use money::*;
pub use state::*;
