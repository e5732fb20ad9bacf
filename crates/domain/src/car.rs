// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Car features accepted by the pricing model.
//!
//! Every categorical feature is a closed enumeration. Values outside the
//! enumeration are rejected when parsing or deserializing, before any
//! model sees them.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Declares a closed categorical feature.
///
/// Each variant is paired with its wire value. The macro generates:
/// - the enum with serde renames for every variant
/// - `ALL`, listing every variant in declaration order
/// - `as_str`, returning the wire value
/// - `FromStr` (exact match, the given error variant otherwise) and `Display`
/// - `Default`, returning the variant marked as default
macro_rules! categorical_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $error:ident, default = $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// All values, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Converts this value to its wire representation.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(DomainError::$error(s.to_string())),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

categorical_enum! {
    /// Car brand.
    ModelKey, InvalidModelKey, default = Citroen {
        Citroen => "Citroën",
        Renault => "Renault",
        Bmw => "BMW",
        Peugeot => "Peugeot",
        Audi => "Audi",
        Nissan => "Nissan",
        Mitsubishi => "Mitsubishi",
        Mercedes => "Mercedes",
        Volkswagen => "Volkswagen",
        Toyota => "Toyota",
        Seat => "SEAT",
        Subaru => "Subaru",
        Pgo => "PGO",
        Opel => "Opel",
        Ferrari => "Ferrari",
        Maserati => "Maserati",
    }
}

categorical_enum! {
    /// Fuel type.
    Fuel, InvalidFuel, default = Diesel {
        Diesel => "diesel",
        Petrol => "petrol",
        HybridPetrol => "hybrid_petrol",
    }
}

categorical_enum! {
    /// Body paint color.
    PaintColor, InvalidPaintColor, default = Grey {
        Black => "black",
        Grey => "grey",
        Blue => "blue",
        White => "white",
        Brown => "brown",
        Silver => "silver",
        Red => "red",
        Beige => "beige",
        Green => "green",
        Orange => "orange",
    }
}

categorical_enum! {
    /// Body style.
    CarType, InvalidCarType, default = Estate {
        Estate => "estate",
        Sedan => "sedan",
        Suv => "suv",
        Hatchback => "hatchback",
        Subcompact => "subcompact",
        Coupe => "coupe",
        Convertible => "convertible",
        Van => "van",
    }
}

/// Features of a car submitted for a price estimate.
///
/// Missing fields take the defaults of a typical fleet car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CarFeatures {
    /// Car brand.
    pub model_key: ModelKey,
    /// Odometer reading in kilometers.
    pub mileage: i64,
    /// Engine power in horsepower.
    pub engine_power: i64,
    /// Fuel type.
    pub fuel: Fuel,
    /// Body paint color.
    pub paint_color: PaintColor,
    /// Body style.
    pub car_type: CarType,
    /// Whether the owner provides a private parking spot.
    pub private_parking_available: bool,
    /// Whether the car has GPS.
    pub has_gps: bool,
    /// Whether the car has air conditioning.
    pub has_air_conditioning: bool,
    /// Whether the car has an automatic gearbox.
    pub automatic_car: bool,
    /// Whether the car supports keyless connect checkin.
    pub has_getaround_connect: bool,
    /// Whether the car has cruise control.
    pub has_speed_regulator: bool,
    /// Whether the car is fitted with winter tires.
    pub winter_tires: bool,
}

impl Default for CarFeatures {
    fn default() -> Self {
        Self {
            model_key: ModelKey::default(),
            mileage: 97_097,
            engine_power: 160,
            fuel: Fuel::default(),
            paint_color: PaintColor::default(),
            car_type: CarType::default(),
            private_parking_available: false,
            has_gps: false,
            has_air_conditioning: true,
            automatic_car: true,
            has_getaround_connect: true,
            has_speed_regulator: true,
            winter_tires: true,
        }
    }
}

impl CarFeatures {
    /// Validates the numeric fields.
    ///
    /// Engine power is passed to the model as given.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NonPositiveMileage` if mileage is zero or negative.
    pub const fn validate(&self) -> Result<(), DomainError> {
        if self.mileage <= 0 {
            return Err(DomainError::NonPositiveMileage {
                mileage: self.mileage,
            });
        }
        Ok(())
    }

    /// Computes the derived `1 / mileage` feature.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NonPositiveMileage` if mileage is zero or negative.
    #[allow(clippy::cast_precision_loss)]
    pub fn mileage_inverse(&self) -> Result<f64, DomainError> {
        if self.mileage <= 0 {
            return Err(DomainError::NonPositiveMileage {
                mileage: self.mileage,
            });
        }
        Ok(1.0 / self.mileage as f64)
    }

    /// Returns the boolean feature flags with their feature names.
    #[must_use]
    pub const fn flags(&self) -> [(&'static str, bool); 7] {
        [
            ("private_parking_available", self.private_parking_available),
            ("has_gps", self.has_gps),
            ("has_air_conditioning", self.has_air_conditioning),
            ("automatic_car", self.automatic_car),
            ("has_getaround_connect", self.has_getaround_connect),
            ("has_speed_regulator", self.has_speed_regulator),
            ("winter_tires", self.winter_tires),
        ]
    }
}
