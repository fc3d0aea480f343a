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

//! Significance testing from summary statistics.
//!
//! Only (mean, standard deviation, sample count) are stored per test, so the
//! comparison uses Welch's unequal-variance t-test computed from summaries.
//! The Student t tail comes from the regularized incomplete beta function.

use crate::config::SIGNIFICANCE_P_VALUE;
use std::f64::consts::PI;

const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEF: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

const BETA_MAX_ITER: usize = 300;
const BETA_EPS: f64 = 1e-14;
const BETA_TINY: f64 = 1e-300;

/// Mean, standard deviation and sample count of one score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    /// Mean score.
    pub mean: f64,
    /// Standard deviation.
    pub std_dev: f64,
    /// Number of samples.
    pub samples: u64,
}

impl ScoreSummary {
    /// Creates a summary.
    pub fn new(mean: f64, std_dev: f64, samples: u64) -> Self {
        Self {
            mean,
            std_dev,
            samples,
        }
    }
}

/// Two-sided p-value of Welch's t-test, `None` when it cannot be computed.
///
/// The test is undefined when either side has fewer than two samples or when
/// both variances are zero.
pub fn welch_p_value(a: &ScoreSummary, b: &ScoreSummary) -> Option<f64> {
    if a.samples < 2 || b.samples < 2 {
        return None;
    }
    let na = a.samples as f64;
    let nb = b.samples as f64;
    let va = a.std_dev * a.std_dev / na;
    let vb = b.std_dev * b.std_dev / nb;
    let var = va + vb;
    if var <= 0.0 || !var.is_finite() {
        return None;
    }

    let t = (a.mean - b.mean) / var.sqrt();
    let df = var * var / (va * va / (na - 1.0) + vb * vb / (nb - 1.0));
    if !t.is_finite() || !df.is_finite() || df <= 0.0 {
        return None;
    }
    Some(student_t_two_sided(t, df))
}

/// Whether two summaries differ at [`SIGNIFICANCE_P_VALUE`].
///
/// Fails open: a test that cannot be computed counts as significant.
pub fn is_significant(a: &ScoreSummary, b: &ScoreSummary) -> bool {
    match welch_p_value(a, b) {
        Some(p) => p < SIGNIFICANCE_P_VALUE,
        None => true,
    }
}

/// Two-sided tail probability `P(|T| >= |t|)` of Student's t with `df` degrees.
pub fn student_t_two_sided(t: f64, df: f64) -> f64 {
    let x = df / (df + t * t);
    regularized_beta(x, df / 2.0, 0.5).clamp(0.0, 1.0)
}

fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }
    let x = x - 1.0;
    let t = x + LANCZOS_G + 0.5;
    let mut sum = LANCZOS_COEF[0];
    for (i, coef) in LANCZOS_COEF.iter().enumerate().skip(1) {
        sum += coef / (x + i as f64);
    }
    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

fn regularized_beta(x: f64, a: f64, b: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let ln_front = ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln();
    let front = ln_front.exp();
    if x < (a + 1.0) / (a + b + 2.0) {
        front * beta_continued_fraction(x, a, b) / a
    } else {
        1.0 - front * beta_continued_fraction(1.0 - x, b, a) / b
    }
}

fn guard_tiny(v: f64) -> f64 {
    if v.abs() < BETA_TINY {
        BETA_TINY
    } else {
        v
    }
}

// Modified Lentz evaluation.
fn beta_continued_fraction(x: f64, a: f64, b: f64) -> f64 {
    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;
    let mut c = 1.0;
    let mut d = 1.0 / guard_tiny(1.0 - qab * x / qap);
    let mut h = d;

    for m in 1..=BETA_MAX_ITER {
        let m = m as f64;
        let m2 = 2.0 * m;

        let aa = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 / guard_tiny(1.0 + aa * d);
        c = guard_tiny(1.0 + aa / c);
        h *= d * c;

        let aa = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 / guard_tiny(1.0 + aa * d);
        c = guard_tiny(1.0 + aa / c);
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < BETA_EPS {
            break;
        }
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_ln_gamma_known_values() {
        assert!(close(ln_gamma(1.0), 0.0, 1e-10));
        assert!(close(ln_gamma(5.0), 24.0_f64.ln(), 1e-10));
        assert!(close(ln_gamma(0.5), PI.sqrt().ln(), 1e-10));
    }

    #[test]
    fn test_student_t_two_sided_table_values() {
        assert!(close(student_t_two_sided(0.0, 10.0), 1.0, 1e-9));
        // Critical values from standard t tables.
        assert!(close(student_t_two_sided(2.228, 10.0), 0.05, 1e-3));
        assert!(close(student_t_two_sided(1.812, 10.0), 0.10, 1e-3));
        assert!(close(student_t_two_sided(2.776, 4.0), 0.05, 1e-3));
        assert!(close(student_t_two_sided(-2.776, 4.0), 0.05, 1e-3));
    }

    #[test]
    fn test_clearly_different_is_significant() {
        let a = ScoreSummary::new(100.0, 5.0, 5);
        let b = ScoreSummary::new(120.0, 5.0, 5);
        let p = welch_p_value(&a, &b).unwrap();
        assert!(p < 0.01, "p = {}", p);
        assert!(is_significant(&a, &b));
    }

    #[test]
    fn test_overlapping_is_not_significant() {
        let a = ScoreSummary::new(100.0, 20.0, 5);
        let b = ScoreSummary::new(101.0, 20.0, 5);
        assert!(!is_significant(&a, &b));
    }

    #[test]
    fn test_identical_summaries_not_significant() {
        let a = ScoreSummary::new(50.0, 3.0, 10);
        let p = welch_p_value(&a, &a).unwrap();
        assert!(close(p, 1.0, 1e-9));
        assert!(!is_significant(&a, &a));
    }

    #[test]
    fn test_zero_variance_fails_open() {
        let a = ScoreSummary::new(50.0, 0.0, 10);
        let b = ScoreSummary::new(50.0, 0.0, 10);
        assert_eq!(welch_p_value(&a, &b), None);
        assert!(is_significant(&a, &b));
    }

    #[test]
    fn test_single_sample_fails_open() {
        let a = ScoreSummary::new(50.0, 1.0, 1);
        let b = ScoreSummary::new(55.0, 1.0, 5);
        assert_eq!(welch_p_value(&a, &b), None);
        assert!(is_significant(&a, &b));
    }

    #[test]
    fn test_symmetry() {
        let a = ScoreSummary::new(10.0, 2.0, 8);
        let b = ScoreSummary::new(12.0, 3.0, 6);
        let ab = welch_p_value(&a, &b).unwrap();
        let ba = welch_p_value(&b, &a).unwrap();
        assert!(close(ab, ba, 1e-12));
    }
}
