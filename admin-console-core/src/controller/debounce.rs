//! Search-as-you-type debouncing.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use super::intent::ControllerEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchChannel {
    /// Suggestions of the "use existing content" picker.
    Content,
    /// Search box above the views list.
    Views,
}

/// One timer per channel; each keystroke restarts it.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    seq: u64,
    latest: HashMap<SearchChannel, (u64, String)>,
    timers: HashMap<SearchChannel, AbortHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            seq: 0,
            latest: HashMap::new(),
            timers: HashMap::new(),
        }
    }

    /// Restart the timer of `channel` for `term`.
    ///
    /// `SearchReady` is posted to `inbox` once the delay elapses without
    /// another keystroke.
    pub fn schedule(
        &mut self,
        channel: SearchChannel,
        term: String,
        inbox: &UnboundedSender<ControllerEvent>,
    ) -> u64 {
        self.cancel(channel);
        self.seq += 1;
        let seq = self.seq;
        self.latest.insert(channel, (seq, term));

        let delay = self.delay;
        let inbox = inbox.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if inbox
                .send(ControllerEvent::SearchReady { channel, seq })
                .is_err()
            {
                log::debug!("Controller gone, dropping {channel:?} search #{seq}");
            }
        });
        self.timers.insert(channel, timer.abort_handle());
        seq
    }

    /// The term to search for, if `seq` is still the latest keystroke.
    pub fn ready(&mut self, channel: SearchChannel, seq: u64) -> Option<String> {
        match self.latest.get(&channel) {
            Some((latest, _)) if *latest == seq => {
                self.timers.remove(&channel);
                self.latest.remove(&channel).map(|(_, term)| term)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self, channel: SearchChannel) {
        if let Some(timer) = self.timers.remove(&channel) {
            timer.abort();
        }
        self.latest.remove(&channel);
    }

    pub fn cancel_all(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.abort();
        }
        self.latest.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn only_last_keystroke_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(SearchChannel::Content, "a".into(), &tx);
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule(SearchChannel::Content, "ab".into(), &tx);
        tokio::time::sleep(Duration::from_millis(100)).await;
        let last = debouncer.schedule(SearchChannel::Content, "abc".into(), &tx);

        let Some(ControllerEvent::SearchReady { channel, seq }) = rx.recv().await else {
            panic!("expected a SearchReady event");
        };
        assert_eq!(channel, SearchChannel::Content);
        assert_eq!(seq, last);
        assert_eq!(debouncer.ready(channel, seq).as_deref(), Some("abc"));
        assert!(debouncer.is_idle());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_ready_is_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        let first = debouncer.schedule(SearchChannel::Views, "x".into(), &tx);
        let second = debouncer.schedule(SearchChannel::Views, "xy".into(), &tx);
        assert_eq!(debouncer.ready(SearchChannel::Views, first), None);
        assert_eq!(
            debouncer.ready(SearchChannel::Views, second).as_deref(),
            Some("xy")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn channels_are_independent() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        let views = debouncer.schedule(SearchChannel::Views, "v".into(), &tx);
        debouncer.schedule(SearchChannel::Content, "c".into(), &tx);
        debouncer.cancel(SearchChannel::Content);
        assert!(!debouncer.is_idle());
        assert_eq!(
            debouncer.ready(SearchChannel::Views, views).as_deref(),
            Some("v")
        );
        assert!(debouncer.is_idle());
    }
}
