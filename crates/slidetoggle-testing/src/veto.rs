use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

#[derive(Default)]
struct Request {
    verdict: Option<bool>,
    waker: Option<Waker>,
    dropped: bool,
}

#[derive(Default)]
struct VetoLog {
    requests: Vec<Rc<RefCell<Request>>>,
}

/// Veto listener whose answers the test hands out one request at a time.
#[derive(Clone, Default)]
pub struct ManualVeto {
    log: Rc<RefCell<VetoLog>>,
}

impl ManualVeto {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listener to register with the toggle. Each call opens a new request.
    pub fn listener(&self) -> impl Fn() -> VetoRequest + 'static {
        let log = self.log.clone();
        move || {
            let request = Rc::new(RefCell::new(Request::default()));
            log.borrow_mut().requests.push(request.clone());
            VetoRequest { request }
        }
    }

    pub fn times_asked(&self) -> usize {
        self.log.borrow().requests.len()
    }

    /// Requests still waiting for a verdict.
    pub fn waiting(&self) -> usize {
        self.log
            .borrow()
            .requests
            .iter()
            .filter(|request| {
                let request = request.borrow();
                request.verdict.is_none() && !request.dropped
            })
            .count()
    }

    /// Requests whose future was dropped before it got a verdict.
    pub fn abandoned(&self) -> usize {
        self.log
            .borrow()
            .requests
            .iter()
            .filter(|request| {
                let request = request.borrow();
                request.verdict.is_none() && request.dropped
            })
            .count()
    }

    /// Answers the oldest waiting request. Returns `false` if none was waiting.
    pub fn resolve(&self, veto: bool) -> bool {
        let log = self.log.borrow();
        let waiting = log.requests.iter().find(|request| {
            let request = request.borrow();
            request.verdict.is_none() && !request.dropped
        });
        let Some(request) = waiting else {
            return false;
        };
        let waker = {
            let mut request = request.borrow_mut();
            request.verdict = Some(veto);
            request.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
        true
    }

    pub fn block(&self) -> bool {
        self.resolve(true)
    }

    pub fn allow(&self) -> bool {
        self.resolve(false)
    }
}

/// Future handed to the toggle for one veto request.
pub struct VetoRequest {
    request: Rc<RefCell<Request>>,
}

impl Future for VetoRequest {
    type Output = bool;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        let mut request = self.request.borrow_mut();
        match request.verdict {
            Some(veto) => Poll::Ready(veto),
            None => {
                request.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

impl Drop for VetoRequest {
    fn drop(&mut self) {
        self.request.borrow_mut().dropped = true;
    }
}

/// Listener that answers every request with `veto` right away.
pub fn immediate_veto(veto: bool) -> impl Fn() -> std::future::Ready<bool> + 'static {
    move || std::future::ready(veto)
}

#[cfg(test)]
#[path = "tests/veto_tests.rs"]
mod tests;
