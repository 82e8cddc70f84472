use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for batches of `len` items. Single items are not worth a bar.
pub fn progress_bar(len: u64, msg: String) -> Option<ProgressBar> {
    if len <= 1 {
        return None;
    }

    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise} / {eta_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");

    let bar = ProgressBar::new(len);
    bar.set_style(style);
    bar.set_message(msg);

    Some(bar)
}

#[cfg(test)]
mod tests {
    use super::progress_bar;

    #[test]
    fn test_single_item_has_no_bar() {
        assert!(progress_bar(1, "Rating charts".to_string()).is_none());
    }

    #[test]
    fn test_batch_has_bar() {
        let bar = progress_bar(5, "Rating charts".to_string()).unwrap();
        assert_eq!(bar.length(), Some(5));
    }
}
