use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Featured item advances every 5 seconds
pub const ROTATE_PERIOD: Duration = Duration::from_secs(5);
/// Scroll strip moves one step every 30 milliseconds
pub const SCROLL_PERIOD: Duration = Duration::from_millis(30);

/// Timer-driven state for the hero carousel: a wrapping featured index and a
/// continuously decrementing scroll offset for the poster strip.
///
/// The two periodic updates are independent, with no ordering guarantee
/// between them. Each task is owned by this handle; dropping (or `stop`-ping)
/// the handle aborts both, so a torn-down view can never be updated again.
#[derive(Debug)]
pub struct HeroRotation {
    featured_count: usize,
    current: Arc<AtomicUsize>,
    scroll: Arc<AtomicI64>,
    tasks: Vec<JoinHandle<()>>,
}

impl HeroRotation {
    /// Create a rotation over `featured_count` items without starting the
    /// timers. A zero count yields an inert rotation.
    pub fn new(featured_count: usize) -> Self {
        Self {
            featured_count,
            current: Arc::new(AtomicUsize::new(0)),
            scroll: Arc::new(AtomicI64::new(0)),
            tasks: Vec::new(),
        }
    }

    /// Start both periodic tasks with the standard periods. Must be called
    /// from within a tokio runtime.
    pub fn start(&mut self) {
        self.start_with_periods(ROTATE_PERIOD, SCROLL_PERIOD);
    }

    /// Start with explicit periods (tests drive this under paused time)
    pub fn start_with_periods(&mut self, rotate_period: Duration, scroll_period: Duration) {
        self.stop();

        if self.featured_count > 0 {
            let current = Arc::clone(&self.current);
            let count = self.featured_count;
            self.tasks.push(tokio::spawn(async move {
                let mut interval = tokio::time::interval(rotate_period);
                // interval fires immediately once; the rotation starts on
                // the first full period
                interval.tick().await;
                loop {
                    interval.tick().await;
                    let next = (current.load(Ordering::Relaxed) + 1) % count;
                    current.store(next, Ordering::Relaxed);
                }
            }));
        }

        let scroll = Arc::clone(&self.scroll);
        self.tasks.push(tokio::spawn(async move {
            let mut interval = tokio::time::interval(scroll_period);
            interval.tick().await;
            loop {
                interval.tick().await;
                scroll.fetch_sub(1, Ordering::Relaxed);
            }
        }));
    }

    /// Abort both timer tasks. Idempotent; also run on drop.
    pub fn stop(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        !self.tasks.is_empty()
    }

    pub fn featured_count(&self) -> usize {
        self.featured_count
    }

    pub fn current_index(&self) -> usize {
        self.current.load(Ordering::Relaxed)
    }

    pub fn scroll_offset(&self) -> i64 {
        self.scroll.load(Ordering::Relaxed)
    }

    /// Advance the featured index by one, wrapping (manual skip)
    pub fn advance(&self) {
        if self.featured_count == 0 {
            return;
        }
        let next = (self.current.load(Ordering::Relaxed) + 1) % self.featured_count;
        self.current.store(next, Ordering::Relaxed);
    }

    /// Jump to a specific featured index (indicator click). Out-of-range
    /// indices are ignored.
    pub fn select(&self, index: usize) {
        if index < self.featured_count {
            self.current.store(index, Ordering::Relaxed);
        } else {
            debug!(index, count = self.featured_count, "select ignored: out of range");
        }
    }
}

impl Drop for HeroRotation {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let rotation = HeroRotation::new(3);
        rotation.advance();
        rotation.advance();
        assert_eq!(rotation.current_index(), 2);
        rotation.advance();
        assert_eq!(rotation.current_index(), 0);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let rotation = HeroRotation::new(3);
        rotation.select(2);
        assert_eq!(rotation.current_index(), 2);
        rotation.select(7);
        assert_eq!(rotation.current_index(), 2);
    }

    #[test]
    fn test_zero_count_is_inert() {
        let rotation = HeroRotation::new(0);
        rotation.advance();
        rotation.select(0);
        assert_eq!(rotation.current_index(), 0);
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timers_advance_index_and_scroll() {
        let mut rotation = HeroRotation::new(4);
        rotation.start_with_periods(Duration::from_secs(5), Duration::from_millis(30));
        settle().await;

        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        assert_eq!(rotation.current_index(), 1);
        // 5s of 30ms ticks have also moved the strip
        assert!(rotation.scroll_offset() < -100);

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(rotation.current_index(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_index_wraps_under_timer() {
        let mut rotation = HeroRotation::new(2);
        rotation.start_with_periods(Duration::from_secs(5), Duration::from_secs(3600));
        settle().await;

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(rotation.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_updates() {
        let mut rotation = HeroRotation::new(4);
        rotation.start_with_periods(Duration::from_secs(5), Duration::from_millis(30));
        settle().await;

        rotation.stop();
        settle().await;
        assert!(!rotation.is_running());

        let index = rotation.current_index();
        let scroll = rotation.scroll_offset();
        tokio::time::advance(Duration::from_secs(30)).await;
        settle().await;
        assert_eq!(rotation.current_index(), index);
        assert_eq!(rotation.scroll_offset(), scroll);
    }
}
