//! Progress bar utilities for long-running identifier batches

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar over a batch of identifiers
pub fn create_batch_progress(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})")
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_batch_progress() {
        let pb = create_batch_progress(1200, "Mapping identifiers");
        assert_eq!(pb.length(), Some(1200));
    }
}
