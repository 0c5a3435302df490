use crate::game::ConfettiPiece;
use tile_engine::GRID_SIZE;
use yew::prelude::*;

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub piece: ConfettiPiece,
}

#[function_component(Confetti)]
pub fn confetti(props: &Props) -> Html {
    let ConfettiPiece {
        color,
        x,
        y,
        rotation,
        opacity,
        ..
    } = props.piece;
    let board = GRID_SIZE as f64;
    let x = (x * board).to_string();
    let y = (y * board).to_string();
    let opacity = opacity.to_string();
    let style = format!("transform:rotate({}deg);", rotation as isize);
    html! {
        <rect x={x} y={y} width="0.12" height="0.06" fill={color} opacity={opacity} style={style} class="rotate-center" />
    }
}
