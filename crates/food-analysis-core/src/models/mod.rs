// ABOUTME: Domain model module for the food analysis server
// ABOUTME: Re-exports the nutrition record and food category types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod nutrition;

pub use nutrition::{FoodCategory, NutritionRecord};
