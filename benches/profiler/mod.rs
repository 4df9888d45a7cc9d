// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

/// Criterion with a pprof flamegraph profiler attached (`cargo bench -- --profile-time 10`).
///
/// `CURRIFLOW_PROFILE_FREQ`, `CURRIFLOW_BENCH_SAMPLES`, `CURRIFLOW_BENCH_WARMUP_SECS` and
/// `CURRIFLOW_BENCH_MEASURE_SECS` override the defaults.
pub fn criterion() -> Criterion {
    let frequency = env_or("CURRIFLOW_PROFILE_FREQ", 100i32).clamp(1, 1000);
    let samples = env_or("CURRIFLOW_BENCH_SAMPLES", 50usize).clamp(10, 200);
    let warmup = env_or("CURRIFLOW_BENCH_WARMUP_SECS", 2u64).clamp(1, 60);
    let measure = env_or("CURRIFLOW_BENCH_MEASURE_SECS", 4u64).clamp(1, 120);

    Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_secs(warmup))
        .measurement_time(Duration::from_secs(measure))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
