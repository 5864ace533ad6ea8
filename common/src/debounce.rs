//! [`Debounce`] of rapidly changing values.

use std::{sync::Arc, time::Duration};

use tokio::{sync::watch, time};
use tracing as log;

/// Value propagated to its subscribers only after it stays unchanged for the
/// configured delay.
///
/// Propagation is driven by the [`Debounce::run()`] future. Dropping that
/// future cancels the pending timer, so nothing is propagated afterwards.
#[derive(Debug)]
pub struct Debounce<T> {
    /// Shared state of this [`Debounce`].
    inner: Arc<Inner<T>>,
}

/// Shared state of a [`Debounce`].
#[derive(Debug)]
struct Inner<T> {
    /// Delay a value should stay unchanged for to be propagated.
    delay: Duration,

    /// Latest raw value.
    input: watch::Sender<T>,

    /// Latest propagated value.
    output: watch::Sender<T>,
}

impl<T> Clone for Debounce<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Debounce<T>
where
    T: Clone + PartialEq,
{
    /// Creates a new [`Debounce`] propagating values after the provided
    /// `delay`.
    ///
    /// The `initial` value is considered already propagated.
    #[must_use]
    pub fn new(initial: T, delay: Duration) -> Self {
        let (input, _) = watch::channel(initial.clone());
        let (output, _) = watch::channel(initial);
        Self {
            inner: Arc::new(Inner {
                delay,
                input,
                output,
            }),
        }
    }

    /// Sets a new raw value, restarting the pending timer (if any).
    pub fn set(&self, value: T) {
        _ = self.inner.input.send_replace(value);
    }

    /// Returns the latest raw value, whether propagated or not.
    #[must_use]
    pub fn latest(&self) -> T {
        self.inner.input.borrow().clone()
    }

    /// Returns the latest propagated value.
    #[must_use]
    pub fn current(&self) -> T {
        self.inner.output.borrow().clone()
    }

    /// Subscribes to the propagated values.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.inner.output.subscribe()
    }

    /// Drives this [`Debounce`], propagating every value which stays
    /// unchanged for the configured delay.
    ///
    /// Never resolves on its own.
    pub async fn run(&self) {
        let Inner {
            delay,
            input,
            output,
        } = &*self.inner;

        let mut rx = input.subscribe();
        let mut pending = *rx.borrow() != *output.borrow();
        loop {
            if !pending && rx.changed().await.is_err() {
                return;
            }
            pending = false;

            loop {
                tokio::select! {
                    () = time::sleep(*delay) => break,
                    res = rx.changed() => if res.is_err() {
                        return;
                    },
                }
            }

            let value = rx.borrow_and_update().clone();
            let propagated = output.send_if_modified(|current| {
                if *current == value {
                    false
                } else {
                    *current = value;
                    true
                }
            });
            if propagated {
                log::trace!("debounced value propagated after {delay:?}");
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use tokio::{task::JoinHandle, time};

    use super::Debounce;

    const DELAY: Duration = Duration::from_millis(300);

    fn drive(debounce: &Debounce<String>) -> JoinHandle<()> {
        let debounce = debounce.clone();
        tokio::spawn(async move { debounce.run().await })
    }

    fn observe(
        debounce: &Debounce<String>,
        last: &str,
    ) -> JoinHandle<Vec<String>> {
        let mut rx = debounce.subscribe();
        let last = last.to_owned();
        tokio::spawn(async move {
            let mut seen = Vec::new();
            while rx.changed().await.is_ok() {
                let value = rx.borrow_and_update().clone();
                let done = value == last;
                seen.push(value);
                if done {
                    break;
                }
            }
            seen
        })
    }

    #[tokio::test(start_paused = true)]
    async fn propagates_only_last_of_rapid_values() {
        let debounce = Debounce::new(String::new(), DELAY);
        let driver = drive(&debounce);
        let observer = observe(&debounce, "ali");

        debounce.set("a".into());
        time::sleep(Duration::from_millis(100)).await;
        debounce.set("al".into());
        time::sleep(Duration::from_millis(100)).await;
        debounce.set("ali".into());

        assert_eq!(observer.await.unwrap(), vec!["ali".to_owned()]);
        assert_eq!(debounce.current(), "ali");
        driver.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn propagates_values_separated_by_delay() {
        let debounce = Debounce::new(String::new(), DELAY);
        let driver = drive(&debounce);
        let observer = observe(&debounce, "ali");

        debounce.set("a".into());
        time::sleep(DELAY + Duration::from_millis(100)).await;
        debounce.set("al".into());
        time::sleep(Duration::from_millis(100)).await;
        debounce.set("ali".into());

        assert_eq!(
            observer.await.unwrap(),
            vec!["a".to_owned(), "ali".to_owned()],
        );
        driver.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn holds_previous_value_until_delay_elapses() {
        let debounce = Debounce::new(String::new(), DELAY);
        let driver = drive(&debounce);

        debounce.set("x".into());
        time::sleep(DELAY - Duration::from_millis(1)).await;
        assert_eq!(debounce.current(), "");
        assert_eq!(debounce.latest(), "x");

        time::sleep(Duration::from_millis(2)).await;
        assert_eq!(debounce.current(), "x");
        driver.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn cancels_pending_value_when_driver_stops() {
        let debounce = Debounce::new(String::new(), DELAY);
        let driver = drive(&debounce);

        debounce.set("x".into());
        time::sleep(Duration::from_millis(100)).await;
        driver.abort();
        time::sleep(DELAY * 2).await;

        assert_eq!(debounce.current(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn propagates_value_set_before_driver_starts() {
        let debounce = Debounce::new(String::new(), DELAY);
        debounce.set("q".into());

        let driver = drive(&debounce);
        time::sleep(DELAY + Duration::from_millis(1)).await;

        assert_eq!(debounce.current(), "q");
        driver.abort();
    }
}
