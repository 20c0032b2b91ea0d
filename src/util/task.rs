use std::collections::HashMap;
use std::future::Future;

use tokio::task::JoinHandle;

/// Keyed background tasks. Spawning under an existing key aborts the
/// previous task, so a superseded fetch never races a newer one.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<F>(&mut self, key: &'static str, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.tasks.insert(key, tokio::spawn(fut)) {
            handle.abort();
        }
    }

    pub fn abort(&mut self, key: &str) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_replaces_task_under_same_key() {
        let mut manager = TaskManager::new();
        let (tx, rx) = flume::unbounded::<&str>();

        let tx1 = tx.clone();
        manager.spawn("fetch", async move {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            let _ = tx1.send("first");
        });
        manager.spawn("fetch", async move {
            let _ = tx.send("second");
        });

        assert_eq!(rx.recv_async().await.unwrap(), "second");
        assert!(rx.try_recv().is_err());
    }
}
