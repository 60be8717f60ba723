use super::PantryApp;

impl PantryApp {
    /// Applies every action that has already arrived, without waiting.
    pub fn poll_action_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            any = true;
        }
        any
    }

    /// Waits for the next action from a network task and applies it.
    pub async fn wait_for_action(&mut self) -> bool {
        match self.action_rx.recv().await {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Runs until neither the tracked request nor a search is outstanding.
    ///
    /// Never returns if a request never answers and no timeout is configured.
    pub async fn settle(&mut self) {
        while self.state.is_busy() {
            if !self.wait_for_action().await {
                break;
            }
        }
    }
}
