use super::confetti::Confetti;
use super::tile::Tile;
use crate::game::{ConfettiPiece, FloatingTile};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub tiles: Vec<FloatingTile>,
    pub final_tile: Option<FloatingTile>,
    pub confetti: Vec<ConfettiPiece>,
    pub image: Option<String>,
}

#[function_component(Board)]
pub fn board(props: &Props) -> Html {
    let Props {
        tiles,
        final_tile,
        confetti,
        image,
    } = props;

    let tiles = tiles.iter().chain(final_tile.iter()).map(|tile| {
        let &FloatingTile { tile, row, col } = tile;
        html! {
            <Tile tile={tile} row={row} col={col} image={image.clone()} />
        }
    });
    let confetti = confetti.iter().map(|piece| {
        html! {
            <Confetti key={piece.id} piece={piece.clone()} />
        }
    });

    html! {
        <>
            {for tiles}
            {for confetti}
        </>
    }
}
