// Dweve perfcmp - Benchmark comparison reports
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Display rounding for scores.

/// Significant digits kept for scores below [`INTEGER_THRESHOLD`].
pub const SIGNIFICANT_DIGITS: i32 = 3;

/// Scores at or above this magnitude are rounded to an integer.
pub const INTEGER_THRESHOLD: f64 = 1000.0;

/// Rounds a score for display.
///
/// ```
/// use perfcmp_core::humanize::float2human;
///
/// assert_eq!(float2human(123.456), 123.0);
/// assert_eq!(float2human(12.345), 12.3);
/// assert_eq!(float2human(98765.4), 98765.0);
/// ```
pub fn float2human(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs();
    if magnitude >= INTEGER_THRESHOLD {
        return value.round();
    }
    let decimals = SIGNIFICANT_DIGITS - 1 - magnitude.log10().floor() as i32;
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_non_finite() {
        assert_eq!(float2human(0.0), 0.0);
        assert!(float2human(f64::NAN).is_nan());
        assert_eq!(float2human(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_significant_digits() {
        assert_eq!(float2human(1.23456), 1.23);
        assert_eq!(float2human(0.012345), 0.0123);
        assert_eq!(float2human(-45.678), -45.7);
        assert_eq!(float2human(100.0), 100.0);
    }

    #[test]
    fn test_large_values_are_integers() {
        assert_eq!(float2human(1000.4), 1000.0);
        assert_eq!(float2human(-2500.6), -2501.0);
    }
}
