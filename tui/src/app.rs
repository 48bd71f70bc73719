use crate::{
    cli::Startup,
    deck::DeckState,
    loading::{LoadStatus, LoadingState},
    open_file::OpenFileState,
    preferences::{self, Preferences},
    theme::Theme,
};
use color_eyre::eyre::Result;
use crossterm::event::EventStream;
use flashdeck_core::{Dataset, Mode, Session, Viewer};
use flashdeck_loader::{DatasetSource, LoadError};
use log::{info, warn};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Default, Clone, Debug, PartialEq)]
pub enum AppView {
    /// Dataset is being fetched, or the fetch failed.
    #[default]
    Loading,
    /// User is typing the path of a dataset file.
    OpenFile,
    /// A dataset is loaded and cards are shown.
    Deck,
    /// Keyboard reference.
    Help,
}

#[derive(Debug)]
pub struct AppState {
    pub loading: LoadingState,
    pub open_file: OpenFileState,
    pub deck: DeckState,
    pub theme: &'static Theme,
    pub prefs: Preferences,
}

/// 35 FPS = 1000ms / 35
const FPS_RATE: Duration = Duration::from_millis(1000 / 35);

/// How long the "loaded" message stays up before the deck appears.
pub const LOAD_SETTLE_DELAY: Duration = Duration::from_millis(800);

pub struct App {
    /// Active application view.
    pub view: AppView,
    /// View to return to when leaving help.
    pub previous_view: Option<AppView>,
    /// Application state.
    ///
    /// This is shared among all views.
    pub state: AppState,
    /// Mode applied after every successful load.
    pub start_mode: Mode,
    /// Is the application running?
    pub is_running: bool,
    /// Event stream.
    pub event_stream: EventStream,
    /// Where the first dataset comes from; consumed by [`App::run`].
    startup: Option<Startup>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(startup: Startup, start_mode: Mode, prefs: Preferences) -> Self {
        let theme = Theme::by_id(&prefs.theme_id);
        Self {
            is_running: false,
            event_stream: EventStream::new(),
            view: AppView::Loading,
            previous_view: None,
            state: AppState {
                loading: LoadingState::default(),
                open_file: OpenFileState::default(),
                deck: DeckState::default(),
                theme,
                prefs,
            },
            start_mode,
            startup: Some(startup),
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: ratatui::DefaultTerminal) -> Result<()> {
        self.is_running = true;
        if let Some(startup) = self.startup.take() {
            self.start(startup);
        }

        // create a ticker for animation updates
        let mut interval = tokio::time::interval(FPS_RATE);

        while self.is_running {
            terminal.draw(|frame| self.draw(frame))?;

            self.poll_load().await;

            // handle events with timeout to allow animation updates
            tokio::select! {
                _ = interval.tick() => {
                    continue;
                }
                result = self.handle_crossterm_events() => {
                    result?;
                }
            }
        }

        Ok(())
    }

    fn start(&mut self, startup: Startup) {
        match startup {
            Startup::Load(DatasetSource::Remote(url)) => self.begin_fetch(url),
            Startup::Load(DatasetSource::File(path)) => {
                self.state.open_file.set_input(&path);
                self.view = AppView::OpenFile;
                self.open_file(path);
            }
            Startup::Prompt(suggestion) => {
                self.state.open_file.set_input(&suggestion);
                self.view = AppView::OpenFile;
            }
        }
    }

    /// Spawn a network fetch and show the loading screen.
    pub fn begin_fetch(&mut self, url: String) {
        info!("[App] Fetching {}", url);
        let task_url = url.clone();
        self.state.loading.task = Some(tokio::spawn(async move {
            flashdeck_loader::fetch(&task_url).await
        }));
        self.state.loading.url = Some(url);
        self.state.loading.status = LoadStatus::Fetching {
            since: Instant::now(),
        };
        self.view = AppView::Loading;
    }

    /// Read `path` synchronously. Failures raise an alert on the open-file view.
    pub fn open_file(&mut self, path: PathBuf) {
        match flashdeck_loader::read_file(&path) {
            Ok(dataset) => {
                self.state.prefs.last_file = Some(path);
                if let Err(err) = preferences::save_preferences(&self.state.prefs) {
                    warn!("[App] Could not save preferences: {}", err);
                }
                self.install(dataset);
            }
            Err(err) => {
                warn!("[App] Loading {:?} failed: {}", path, err);
                self.state.open_file.alert = Some(describe_load_error(&err));
                self.view = AppView::OpenFile;
            }
        }
    }

    /// Check on a running fetch and move to the deck once it settled.
    async fn poll_load(&mut self) {
        let loading = &mut self.state.loading;

        if loading.task.as_ref().is_some_and(|task| task.is_finished()) {
            if let Some(task) = loading.task.take() {
                loading.status = match task.await {
                    Ok(result) => {
                        if let Err(err) = &result {
                            warn!("[App] Fetch failed: {}", err);
                        }
                        LoadStatus::finished(result, Instant::now())
                    }
                    Err(join_err) => LoadStatus::Failed {
                        transport: true,
                        message: format!("Fetch task failed: {}", join_err),
                    },
                };
            }
        }

        if let Some(dataset) = loading
            .status
            .take_settled(Instant::now(), LOAD_SETTLE_DELAY)
        {
            self.install(dataset);
        }
    }

    /// Hand a validated dataset to the viewer and show the deck.
    pub fn install(&mut self, dataset: Dataset) {
        info!("[App] Installing dataset with {} questions", dataset.len());
        let deck = &mut self.state.deck;
        match deck.viewer.as_mut() {
            Some(viewer) => viewer.load(dataset),
            None => deck.viewer = Some(Viewer::new(Session::new(dataset))),
        }
        if self.start_mode != Mode::Basic {
            if let Some(viewer) = deck.viewer.as_mut() {
                viewer.apply(flashdeck_core::Action::SwitchMode(self.start_mode));
            }
        }
        deck.on_new_dataset();
        self.view = AppView::Deck;
    }

    /// Renders the user interface.
    fn draw(&mut self, frame: &mut ratatui::Frame) {
        match self.view.clone() {
            AppView::Loading => self.draw_loading(frame),
            AppView::OpenFile => self.draw_open_file(frame),
            AppView::Deck => self.draw_deck(frame),
            AppView::Help => self.draw_help(frame),
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    async fn handle_crossterm_events(&mut self) -> Result<()> {
        use crossterm::event::{Event, KeyEventKind, KeyModifiers};
        use futures::{FutureExt, StreamExt};

        let event = self.event_stream.next().fuse().await;
        match event {
            Some(Ok(evt)) => match evt {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    use crossterm::event::KeyCode;

                    // application-wide CTRL+C handler
                    if matches!(
                        (key.modifiers, key.code),
                        (
                            KeyModifiers::CONTROL,
                            KeyCode::Char('c') | KeyCode::Char('C')
                        )
                    ) {
                        self.quit();
                        return Ok(());
                    };

                    match self.view.clone() {
                        AppView::Loading => self.handle_loading_input(key),
                        AppView::OpenFile => self.handle_open_file_input(key),
                        AppView::Deck => self.handle_deck_input(key),
                        AppView::Help => self.handle_help_input(key),
                    }
                }
                Event::Mouse(mouse) if self.view == AppView::Deck => {
                    self.handle_deck_mouse(mouse);
                }
                Event::Resize(_, _) => {}
                _ => {}
            },
            _ => {}
        }
        Ok(())
    }

    /// Show the help screen, remembering where to return.
    pub fn show_help(&mut self) {
        self.previous_view = Some(self.view.clone());
        self.view = AppView::Help;
    }

    /// Switch to the next theme and remember it.
    pub fn cycle_theme(&mut self) {
        self.state.theme = self.state.theme.next();
        self.state.prefs.theme_id = self.state.theme.id.to_string();
        if let Err(err) = preferences::save_preferences(&self.state.prefs) {
            warn!("[App] Could not save preferences: {}", err);
        }
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.is_running = false;
    }
}

/// User-facing description of a load failure.
pub fn describe_load_error(err: &LoadError) -> String {
    match err {
        LoadError::InvalidDataset(inner) => format!("Invalid dataset: {}", inner),
        other => format!("Could not load dataset: {}", other),
    }
}
