const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
/// Conservative upload throughput, MB/s
const UPLOAD_SPEED_MBPS: f64 = 0.5;
const BASE_PROCESSING_MS: f64 = 10_000.0;
const PROCESSING_MS_PER_MB: f64 = 1_000.0;
const SAFETY_FACTOR: f64 = 1.5;

pub const MIN_ETA_MS: u64 = 15_000;
pub const MAX_ETA_MS: u64 = 900_000;

pub const FINALIZING_MESSAGE: &str = "Casi listo… finalizando procesamiento del servidor";

pub fn size_mb(size_bytes: u64) -> f64 {
    size_bytes as f64 / BYTES_PER_MB
}

/// Expected time until the server answers, clamped to 15 s ..= 15 min
pub fn estimate_upload_ms(size_bytes: u64) -> u64 {
    let mb = size_mb(size_bytes);
    let upload_ms = mb / UPLOAD_SPEED_MBPS * 1000.0;
    let processing_ms = BASE_PROCESSING_MS + mb * PROCESSING_MS_PER_MB;
    let total = (upload_ms + processing_ms) * SAFETY_FACTOR;
    (total.round() as u64).clamp(MIN_ETA_MS, MAX_ETA_MS)
}

fn rounded_secs(ms: u64) -> u64 {
    (ms + 500) / 1000
}

/// `07s` below a minute, `m:ss min` above
pub fn format_duration(ms: u64) -> String {
    let total = rounded_secs(ms);
    let (m, s) = (total / 60, total % 60);
    if m == 0 {
        format!("{:02}s", s)
    } else {
        format!("{}:{:02} min", m, s)
    }
}

pub fn format_hhmmss(ms: u64) -> String {
    let total = rounded_secs(ms);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Countdown value; floors at zero
pub fn remaining_ms(eta_ms: u64, elapsed_ms: u64) -> u64 {
    eta_ms.saturating_sub(elapsed_ms)
}

/// The upload is running well past its estimate (elapsed > 1.2 × ETA)
pub fn is_overdue(eta_ms: u64, elapsed_ms: u64) -> bool {
    elapsed_ms as f64 > eta_ms as f64 * 1.2
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn tiny_files_get_the_floor() {
        assert_eq!(estimate_upload_ms(0), MIN_ETA_MS);
        assert_eq!(estimate_upload_ms(10 * 1024), MIN_ETA_MS);
    }

    #[test]
    fn five_mb_is_in_bounds() {
        // (10 000 + 10 000 + 5 000) * 1.5
        assert_eq!(estimate_upload_ms(5 * MB), 37_500);
    }

    #[test]
    fn huge_files_hit_the_ceiling() {
        assert_eq!(estimate_upload_ms(2048 * MB), MAX_ETA_MS);
    }

    #[test]
    fn estimate_never_decreases_with_size() {
        let mut last = 0;
        for mb in 0..400 {
            let eta = estimate_upload_ms(mb * MB / 2);
            assert!(eta >= last);
            assert!((MIN_ETA_MS..=MAX_ETA_MS).contains(&eta));
            last = eta;
        }
    }

    #[test]
    fn durations_format_like_the_progress_panel() {
        assert_eq!(format_duration(7_000), "07s");
        assert_eq!(format_duration(37_500), "38s");
        assert_eq!(format_duration(65_000), "1:05 min");
        assert_eq!(format_hhmmss(3_725_000), "01:02:05");
    }

    #[test]
    fn countdown_floors_and_overdue_kicks_in() {
        assert_eq!(remaining_ms(15_000, 20_000), 0);
        assert!(!is_overdue(10_000, 12_000));
        assert!(is_overdue(10_000, 12_001));
    }
}
