use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom;
use crate::error::UiResult;
use crate::rating::star_state;

const STAR: &str = ".star-rating .bx";

fn rating_of(star: &Element) -> Option<u32> {
    star.get_attribute("data-rating")?.trim().parse().ok()
}

fn rate(clicked_star: Element) -> UiResult<()> {
    let Some(clicked) = rating_of(&clicked_star) else {
        log::warn!("star without data-rating");
        return Ok(());
    };
    for star in dom::query_all(STAR) {
        let Some(rating) = rating_of(&star) else {
            continue;
        };
        let state = star_state(rating, clicked);
        let classes = star.class_list();
        classes.remove_1(state.opposite_class())?;
        classes.add_1(state.class())?;
    }

    let hidden = clicked_star
        .closest(".star-rating")?
        .and_then(|widget| widget.query_selector("input[name=\"rating\"]").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if let Some(input) = hidden {
        input.set_value(&clicked.to_string());
    }
    Ok(())
}

pub fn bind() {
    dom::on_delegated("click", STAR, rate);
}
