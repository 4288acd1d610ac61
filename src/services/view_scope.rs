use tokio::sync::watch;

/// Lifetime token of one page instance.
///
/// Loads run against a scope; once the scope is closed they stop without
/// applying results. A scope closes when its [`ViewGuard`] is dropped.
#[derive(Clone, Debug)]
pub struct ViewScope {
    rx: Option<watch::Receiver<bool>>,
}

/// Owner side of a [`ViewScope`]. Dropping it tears the view down.
#[derive(Debug)]
pub struct ViewGuard {
    tx: watch::Sender<bool>,
}

pub fn view_scope() -> (ViewGuard, ViewScope) {
    let (tx, rx) = watch::channel(false);
    (ViewGuard { tx }, ViewScope { rx: Some(rx) })
}

impl Drop for ViewGuard {
    fn drop(&mut self) {
        let _ = self.tx.send(true);
    }
}

impl ViewScope {
    /// A scope that never closes, for one-shot callers such as the CLI.
    pub fn detached() -> Self {
        Self { rx: None }
    }

    pub fn is_closed(&self) -> bool {
        match &self.rx {
            None => false,
            Some(rx) => *rx.borrow() || rx.has_changed().is_err(),
        }
    }

    /// Resolves once the scope is closed; never resolves for a detached scope.
    pub async fn closed(&self) {
        let Some(rx) = &self.rx else {
            return std::future::pending().await;
        };
        let mut rx = rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}
