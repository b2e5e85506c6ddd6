use super::*;
use std::sync::Arc;
use std::task::Wake;

struct CountingWaker(std::sync::atomic::AtomicUsize);

impl Wake for CountingWaker {
    fn wake(self: Arc<Self>) {
        self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

fn poll_once(future: &mut VetoRequest, waker: &Waker) -> Poll<bool> {
    let mut cx = Context::from_waker(waker);
    Pin::new(future).poll(&mut cx)
}

#[test]
fn request_waits_for_verdict_and_wakes() {
    let veto = ManualVeto::new();
    let listener = veto.listener();
    let counter = Arc::new(CountingWaker(Default::default()));
    let waker = Waker::from(counter.clone());

    let mut request = listener();
    assert_eq!(veto.times_asked(), 1);
    assert_eq!(poll_once(&mut request, &waker), Poll::Pending);
    assert_eq!(veto.waiting(), 1);

    assert!(veto.block());
    assert_eq!(counter.0.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert_eq!(poll_once(&mut request, &waker), Poll::Ready(true));
    assert_eq!(veto.waiting(), 0);
}

#[test]
fn verdicts_go_to_oldest_request_first() {
    let veto = ManualVeto::new();
    let listener = veto.listener();
    let waker = Waker::from(Arc::new(CountingWaker(Default::default())));
    let mut first = listener();
    let mut second = listener();

    veto.allow();
    assert_eq!(poll_once(&mut first, &waker), Poll::Ready(false));
    assert_eq!(poll_once(&mut second, &waker), Poll::Pending);
}

#[test]
fn dropped_request_counts_as_abandoned() {
    let veto = ManualVeto::new();
    let listener = veto.listener();
    drop(listener());
    assert_eq!(veto.abandoned(), 1);
    assert!(!veto.resolve(true));
}
