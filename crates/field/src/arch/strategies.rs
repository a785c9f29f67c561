// Copyright 2024-2025 Irreducible Inc.

/// Eight rounds of shift-and-xor with reduction by the AES polynomial after each doubling.
pub struct PeasantStrategy;
/// Add discrete logarithms and look the sum up in the exponent table.
pub struct LogTableStrategy;
/// Carry-less polynomial product followed by long division by the AES polynomial.
pub struct CarrylessStrategy;
