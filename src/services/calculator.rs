// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Footprint calculator.
//!
//! Stateless weighted sums over the three input categories. Emission
//! factors are kg CO2e per unit of the labelled activity.

use serde::Deserialize;

use crate::models::{EntrySource, FootprintEntry};

/// Monthly travel inputs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelInput {
    /// Flight miles per month
    pub flight_miles: f64,
    /// Car miles per month
    pub car_miles: f64,
    /// Public transport trips per month
    pub public_transport: f64,
}

/// Monthly household energy inputs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeEnergyInput {
    /// Electricity in kWh
    pub electricity: f64,
    /// Natural gas in therms
    pub gas: f64,
    /// Heating oil in gallons
    pub heating: f64,
}

/// Monthly food and purchases inputs, in pounds.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodInput {
    pub meat: f64,
    pub dairy: f64,
    pub processed: f64,
}

/// Full calculator form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorInput {
    pub travel: TravelInput,
    pub home_energy: HomeEnergyInput,
    pub food_purchases: FoodInput,
}

pub fn travel_footprint(input: &TravelInput) -> f64 {
    input.flight_miles * 0.25 + input.car_miles * 0.4 + input.public_transport * 0.1
}

pub fn home_energy_footprint(input: &HomeEnergyInput) -> f64 {
    input.electricity * 0.5 + input.gas * 0.2 + input.heating * 0.3
}

pub fn food_footprint(input: &FoodInput) -> f64 {
    input.meat * 6.5 + input.dairy * 3.2 + input.processed * 2.1
}

/// Build the history entry for a submitted form.
///
/// Each category subtotal is rounded to the nearest integer before the
/// total is formed; the displayed total is the sum of the rounded
/// subtotals, never a rounding of the raw grand total.
pub fn build_entry(
    input: &CalculatorInput,
    id: String,
    user_id: String,
    date: String,
) -> FootprintEntry {
    let travel = travel_footprint(&input.travel).round() as i64;
    let home_energy = home_energy_footprint(&input.home_energy).round() as i64;
    let food_purchases = food_footprint(&input.food_purchases).round() as i64;

    FootprintEntry {
        id,
        user_id,
        date,
        travel,
        home_energy,
        food_purchases,
        total: travel + home_energy + food_purchases,
        source: EntrySource::Manual,
    }
}
