// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Demonstration consumer: builds an array, mutates it through the
//! public API, and prints each stage.
//!
//! Run with: cargo run -p dynarray --example consumer

use dynarray::{DynArray, DynArrayError, dynarray};

fn print_stage(label: &str, values: &DynArray<i32>) -> Result<(), DynArrayError> {
    println!("{label}:");
    println!("  front: {}", values.front()?);
    println!("  back: {}", values.back()?);
    println!("  size: {}", values.len());
    println!("  capacity: {}", values.capacity());

    print!("  ");
    for value in values {
        print!("{value}, ");
    }
    println!();

    Ok(())
}

fn main() -> Result<(), DynArrayError> {
    let template = dynarray![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

    // Independent deep copy; mutating `values` leaves `template` alone.
    let mut values = template.clone();
    for i in 11..=16 {
        values.push(i)?;
    }
    print_stage("filled", &values)?;

    values.pop();
    print_stage("popped", &values)?;

    let live = values.len();
    values.erase(6..live)?;
    print_stage("erased", &values)?;

    values.shrink_to_fit()?;
    print_stage("shrunk", &values)?;

    print_stage("template (unchanged)", &template)?;
    Ok(())
}
