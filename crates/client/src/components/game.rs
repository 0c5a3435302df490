use super::board::Board;
use super::button::Button;
use crate::catalog::PuzzleEntry;
use crate::game::{self, *};
use crate::image::{load_puzzle_image, LoadedImage};
use std::cell::RefCell;
use std::rc::Rc;
use tile_engine::GRID_SIZE;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

fn raf_loop(mut func: impl FnMut() + 'static) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => {
            log::error!("no window to animate");
            return;
        }
    };
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    let request_animation_frame = |window: &web_sys::Window, f: &Closure<dyn FnMut()>| {
        if let Err(err) = window.request_animation_frame(f.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", err);
        }
    };

    let cloned_window = window.clone();
    *f.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        func();
        if let Some(f) = g.borrow().as_ref() {
            request_animation_frame(&cloned_window, f);
        }
    }) as Box<dyn FnMut()>));
    if let Some(f) = f.borrow().as_ref() {
        request_animation_frame(&window, f);
    };
}

fn pointer_cell(board: &NodeRef, client_x: i32, client_y: i32, cell_size: f64) -> Option<usize> {
    let rect = board.cast::<web_sys::Element>()?.get_bounding_client_rect();
    cell_index(
        client_x as f64 - rect.left(),
        client_y as f64 - rect.top(),
        cell_size,
    )
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub cell_size: f64,
    pub entry: PuzzleEntry,
    pub fallback_image: String,
}

#[function_component(Game)]
pub fn game_component(props: &Props) -> Html {
    let Props {
        cell_size,
        entry,
        fallback_image,
    } = props.clone();

    let game = use_reducer(|| {
        let seed = u64::from_be_bytes(js_sys::Math::random().to_be_bytes());
        game::Game::new(seed, js_sys::Date::now())
    });
    let requested = entry.image.clone();
    let image = use_state(move || LoadedImage::pending(&requested));
    let board_ref = use_node_ref();

    let cloned_game = game.clone();
    use_effect_with_deps(
        move |_| {
            raf_loop(move || {
                cloned_game.dispatch(GameAction::Animate(js_sys::Date::now()));
            });
            || ()
        },
        (),
    );

    let cloned_image = image.clone();
    use_effect_with_deps(
        move |(requested, fallback): &(String, String)| {
            let requested = requested.clone();
            let fallback = fallback.clone();
            wasm_bindgen_futures::spawn_local(async move {
                cloned_image.set(load_puzzle_image(&requested, &fallback).await);
            });
            || ()
        },
        (entry.image.clone(), fallback_image),
    );

    let cloned_game = game.clone();
    let cloned_board = board_ref.clone();
    let onmousedown = Callback::from(move |event: web_sys::MouseEvent| {
        event.prevent_default();
        if let Some(index) =
            pointer_cell(&cloned_board, event.client_x(), event.client_y(), cell_size)
        {
            cloned_game.dispatch(GameAction::Move(index));
        }
    });

    let cloned_game = game.clone();
    let cloned_board = board_ref.clone();
    let ontouchstart = Callback::from(move |event: web_sys::TouchEvent| {
        event.prevent_default();
        let touches = event.target_touches();
        for i in 0..touches.length() {
            if let Some(touch) = touches.item(i) {
                if let Some(index) =
                    pointer_cell(&cloned_board, touch.client_x(), touch.client_y(), cell_size)
                {
                    cloned_game.dispatch(GameAction::Move(index));
                }
            }
        }
    });

    let cloned_game = game.clone();
    let onshuffle = Callback::from(move |_| cloned_game.dispatch(GameAction::Shuffle));

    let is_touch = web_sys::window()
        .map(|window| window.navigator().max_touch_points() > 0)
        .unwrap_or(false);
    let (onmousedown, ontouchstart) = if is_touch {
        (Callback::from(|_| ()), ontouchstart)
    } else {
        (onmousedown, Callback::from(|_| ()))
    };

    let is_won = game.is_won();
    let board_size = cell_size * GRID_SIZE as f64;
    let view_box = format!("0 0 {} {}", GRID_SIZE, GRID_SIZE);
    let class = if is_won {
        classes!("board", "solved")
    } else {
        classes!("board")
    };
    let message = if is_won {
        entry.message.clone()
    } else {
        String::new()
    };

    html! {
        <div class="game">
            <svg class={class} width={board_size.to_string()} height={board_size.to_string()} viewBox={view_box} onmousedown={onmousedown} ontouchstart={ontouchstart} ref={board_ref}>
                <Board
                    tiles={game.tiles()}
                    final_tile={game.final_tile()}
                    confetti={game.confetti()}
                    image={image.src.clone()} />
            </svg>
            <p class="message">{message}</p>
            <div class="controls">
                if !game.puzzle.is_active() {
                    <Button theme={image.theme.clone()} onclick={onshuffle}>{"Mezclar"}</Button>
                }
                if is_won {
                    <a class="button" style={image.theme.style()} href={entry.link}>{"Continuar"}</a>
                }
            </div>
        </div>
    }
}
