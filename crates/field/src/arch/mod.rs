// Copyright 2024-2025 Irreducible Inc.

mod portable;
mod strategies;

pub use strategies::*;
