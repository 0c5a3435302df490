use tile_engine::{grid, GRID_SIZE};
use yew::prelude::*;

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub tile: usize,
    pub row: f64,
    pub col: f64,
    pub image: Option<String>,
}

#[function_component(Tile)]
pub fn tile(props: &Props) -> Html {
    let Props {
        tile,
        row,
        col,
        image,
    } = props.clone();
    let (crop_row, crop_col) = grid::crop_origin(tile);
    let view_box = format!("{} {} 1 1", crop_col, crop_row);
    let picture = match image {
        Some(href) => html! {
            <image href={href} width={GRID_SIZE.to_string()} height={GRID_SIZE.to_string()} preserveAspectRatio="xMidYMid slice" />
        },
        None => html! {},
    };

    html! {
        <svg x={col.to_string()} y={row.to_string()} width="1" height="1" viewBox={view_box} class="tile">
            {picture}
            <rect x={crop_col.to_string()} y={crop_row.to_string()} width="1" height="1" class="stroke" />
        </svg>
    }
}
