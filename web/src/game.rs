use crate::api::HttpTriviaSource;
use crate::utils::js_random_seed;
use jeopardy_core as game;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::rc::Rc;
use yew::prelude::*;

const fn showing_class(showing: game::Showing) -> &'static str {
    use game::Showing::*;
    match showing {
        Hidden => "hidden",
        Question => "question",
        Answer => "answer",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    SetupProgress(game::SessionId, game::SetupState),
    SetupFinished(game::SessionId, game::Result<game::CategoryStore>),
    CellActivated(game::CellCoord),
    Restart,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    cell: game::CellDisplay,
    callback: Callback<game::CellCoord>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps { cell, callback } = props.clone();
    let coord = cell.coord;
    let class = classes!("cell", showing_class(cell.showing));

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", coord.category, coord.clue);
        callback.emit(coord);
    });

    html! {
        <td
            {class}
            data-category={coord.category.to_string()}
            data-clue={coord.clue.to_string()}
            {onclick}
        >
            {cell.text}
        </td>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct BoardProps {
    display: game::BoardDisplay,
    callback: Callback<game::CellCoord>,
}

#[function_component(BoardView)]
fn board_component(props: &BoardProps) -> Html {
    let BoardProps { display, callback } = props;

    html! {
        <table id="jeopardy">
            <thead>
                <tr>
                    { for display.titles.iter().map(|title| html! { <th>{title.clone()}</th> }) }
                </tr>
            </thead>
            <tbody>
                {
                    for display.rows.iter().map(|row| html! {
                        <tr>
                            {
                                for row.iter().map(|cell| {
                                    let callback = callback.clone();
                                    html! { <CellView cell={cell.clone()} {callback}/> }
                                })
                            }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub api: AttrValue,
    pub timeout_ms: u32,
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::GameSession,
    /// Rendered once per session, then patched one cell at a time.
    display: Option<game::BoardDisplay>,
    source: Rc<HttpTriviaSource>,
}

impl GameView {
    fn start_setup(&mut self, ctx: &Context<Self>, seed: u64) {
        let id = self.session.reset();
        self.display = None;
        log::info!("new board {:?}, seed: {}", id, seed);

        let link = ctx.link().clone();
        let source = Rc::clone(&self.source);
        let config = self.session.config();
        wasm_bindgen_futures::spawn_local(async move {
            let mut rng = SmallRng::seed_from_u64(seed);
            let progress = link.clone();
            let mut setup = game::GameSetup::new(source.as_ref(), config);
            let result = setup
                .run(&mut rng, move |state| {
                    progress.send_message(Msg::SetupProgress(id, state))
                })
                .await;
            link.send_message(Msg::SetupFinished(id, result));
        });
    }

    fn status_view(&self) -> Html {
        match (self.session.phase(), self.session.error()) {
            (game::SetupState::Failed, Some(err)) => html! {
                <p class="error">{format!("Could not load the board: {err}. Press restart to try again.")}</p>
            },
            (phase, _) => html! {
                <p class="loading"><span class="spinner"/>{format!("{phase}…")}</p>
            },
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut view = Self {
            session: game::GameSession::default(),
            display: None,
            source: Rc::new(HttpTriviaSource::new(props.api.as_str(), props.timeout_ms)),
        };
        view.start_setup(ctx, props.seed.unwrap_or_else(js_random_seed));
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            SetupProgress(id, state) => self.session.update_phase(id, state),
            SetupFinished(id, result) => {
                if !self.session.finish(id, result) {
                    return false;
                }
                if let Some(err) = self.session.error() {
                    log::error!("could not set up board: {}", err);
                }
                self.display = self.session.display();
                true
            }
            CellActivated(coord) => {
                log::debug!("reveal cell: {:?}", coord);
                match (self.session.reveal(coord), self.display.as_mut()) {
                    (Some((outcome, cell)), Some(display)) if outcome.has_update() => {
                        display.replace_cell(cell);
                        true
                    }
                    _ => false,
                }
            }
            Restart => {
                self.start_setup(ctx, js_random_seed());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = self.session.phase().is_loading();
        let cb_restart = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Restart
        });
        let cb_cell = ctx.link().callback(Msg::CellActivated);

        html! {
            <div class="jeopardy">
                <nav>
                    <button id="restart" class={loading.then_some("loading")} onclick={cb_restart}>
                        { if loading { "Loading…" } else { "Restart" } }
                    </button>
                </nav>
                {
                    match &self.display {
                        Some(display) => html! { <BoardView display={display.clone()} callback={cb_cell}/> },
                        None => self.status_view(),
                    }
                }
            </div>
        }
    }
}
