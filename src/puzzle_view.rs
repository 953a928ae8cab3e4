use folio_core::board::{Quadrant, Side, Tile};
use folio_core::{ActionOutcome, PuzzleAction, PuzzleState};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};
use yew::prelude::*;

use crate::notice::{self, NoticeKind};

pub(crate) const SOLVE_BUTTON_ID: &str = "puzzle-solve";
const TILE_SELECTOR: &str = "[data-image][data-position]";
const COMPLETE_MESSAGE: &str = "Puzzle complete! Every image is back together.";

fn background_position(quadrant: Quadrant) -> &'static str {
    match quadrant {
        Quadrant::TopLeft => "0% 0%",
        Quadrant::TopRight => "100% 0%",
        Quadrant::BottomLeft => "0% 100%",
        Quadrant::BottomRight => "100% 100%",
    }
}

/// Resolves the tile under an event target by walking up to the nearest
/// element carrying the tile attributes.
fn tile_from_event(event: &Event) -> Option<Tile> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let element = target.closest(TILE_SELECTOR).ok()??;
    let image = element.get_attribute("data-image")?;
    let position = element.get_attribute("data-position")?;
    Tile::from_attrs(&image, &position)
}

fn announce(outcome: ActionOutcome) {
    if outcome.just_completed {
        gloo::console::log!("puzzle complete");
        notice::show(COMPLETE_MESSAGE, NoticeKind::Success);
    }
}

fn render_tile(tile: &Tile) -> Html {
    let style = format!(
        "background-image: url({}); background-position: {};",
        tile.image.src(),
        background_position(tile.quadrant)
    );
    let label = format!("{} piece, {}", tile.image.label(), tile.quadrant);
    html! {
        <div
            key={tile.to_string()}
            class="puzzle-tile"
            draggable="true"
            data-image={tile.image.slug()}
            data-position={tile.quadrant.as_str()}
            style={style}
            aria-label={label}
        />
    }
}

fn render_side(state: &PuzzleState, side: Side) -> Html {
    html! {
        <div class={side.container_class()}>
            {for state.board.side(side).iter().map(render_tile)}
        </div>
    }
}

/// The board keeps its state in a ref so a drag in flight does not trigger a
/// render; only moves and solves redraw. Drag events are handled once on the
/// stable board element and resolved to tiles by attribute lookup.
#[function_component(PuzzleBoard)]
pub(crate) fn puzzle_board() -> Html {
    let state = use_mut_ref(PuzzleState::default);
    let redraw = use_force_update();

    let dispatch = {
        let state = state.clone();
        move |action: PuzzleAction| {
            let outcome = state.borrow_mut().apply(action);
            if outcome.moved || matches!(action, PuzzleAction::Solve) {
                redraw.force_update();
            }
            announce(outcome);
        }
    };

    let on_drag_start = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: DragEvent| {
            let Some(tile) = tile_from_event(&event) else {
                return;
            };
            if let Some(transfer) = event.data_transfer() {
                if let Err(err) = transfer.set_data("text/plain", &tile.to_string()) {
                    gloo::console::warn!("puzzle: drag data not set", err);
                }
                transfer.set_effect_allowed("move");
            }
            dispatch(PuzzleAction::BeginDrag { tile });
        })
    };
    let on_drag_over = Callback::from(|event: DragEvent| {
        event.prevent_default();
    });
    let on_drop = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            match tile_from_event(&event) {
                Some(tile) => dispatch(PuzzleAction::DropOn { tile }),
                None => dispatch(PuzzleAction::CancelDrag),
            }
        })
    };
    let on_drag_end = {
        let dispatch = dispatch.clone();
        Callback::from(move |_event: DragEvent| {
            dispatch(PuzzleAction::CancelDrag);
        })
    };
    let on_solve = Callback::from(move |_event: MouseEvent| {
        dispatch(PuzzleAction::Solve);
    });

    let current = state.borrow();
    let board_class = if current.solved {
        classes!("puzzle-board", "is-solved")
    } else {
        classes!("puzzle-board")
    };
    html! {
        <div class="puzzle">
            <div
                class={board_class}
                ondragstart={on_drag_start}
                ondragover={on_drag_over}
                ondrop={on_drop}
                ondragend={on_drag_end}
            >
                {render_side(&current, Side::Left)}
                {render_side(&current, Side::Right)}
            </div>
            <button
                id={SOLVE_BUTTON_ID}
                type="button"
                class="btn btn-outline-light"
                onclick={on_solve}
            >
                {"Skip"}
            </button>
        </div>
    }
}
