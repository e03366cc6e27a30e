use crate::ports::{Clock, GitHubPort, GitPort, HistoryStore, StaticWebAppPort, Typechecker};

/// Application context holding the collaborators a deployment talks to.
pub struct AppContext {
    typechecker: Box<dyn Typechecker>,
    git: Box<dyn GitPort>,
    github: Box<dyn GitHubPort>,
    static_web_app: Box<dyn StaticWebAppPort>,
    history: Box<dyn HistoryStore>,
    clock: Box<dyn Clock>,
}

impl AppContext {
    /// Create a new application context.
    pub fn new(
        typechecker: Box<dyn Typechecker>,
        git: Box<dyn GitPort>,
        github: Box<dyn GitHubPort>,
        static_web_app: Box<dyn StaticWebAppPort>,
        history: Box<dyn HistoryStore>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self { typechecker, git, github, static_web_app, history, clock }
    }

    pub fn typechecker(&self) -> &dyn Typechecker {
        self.typechecker.as_ref()
    }

    pub fn git(&self) -> &dyn GitPort {
        self.git.as_ref()
    }

    pub fn github(&self) -> &dyn GitHubPort {
        self.github.as_ref()
    }

    pub fn static_web_app(&self) -> &dyn StaticWebAppPort {
        self.static_web_app.as_ref()
    }

    /// Get a reference to the deployment history store.
    pub fn history(&self) -> &dyn HistoryStore {
        self.history.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
