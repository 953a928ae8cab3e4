use web_sys::Element;

use crate::contact_form::ContactFormView;
use crate::puzzle_view::PuzzleBoard;
use crate::skills_view::SkillsSection;

pub(crate) const SKILLS_ROOT_ID: &str = "skills";
pub(crate) const CONTACT_ROOT_ID: &str = "contact-form-root";
pub(crate) const PUZZLE_ROOT_ID: &str = "puzzle-root";

fn root_by_id(id: &str) -> Option<Element> {
    let window = web_sys::window()?;
    let document = window.document()?;
    document.get_element_by_id(id)
}

/// Mounts each section into its placeholder. A page without a placeholder
/// simply skips that section.
pub(crate) fn run() {
    match root_by_id(SKILLS_ROOT_ID) {
        Some(root) => {
            let _app_handle = yew::Renderer::<SkillsSection>::with_root(root).render();
        }
        None => gloo::console::log!("skills root missing, skipping"),
    }
    match root_by_id(CONTACT_ROOT_ID) {
        Some(root) => {
            let _app_handle = yew::Renderer::<ContactFormView>::with_root(root).render();
        }
        None => gloo::console::log!("contact form root missing, skipping"),
    }
    match root_by_id(PUZZLE_ROOT_ID) {
        Some(root) => {
            let _app_handle = yew::Renderer::<PuzzleBoard>::with_root(root).render();
        }
        None => gloo::console::log!("puzzle root missing, skipping"),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_root(id: &str) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        root.set_id(id);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        root
    }

    fn count(root: &Element, selector: &str) -> u32 {
        root.query_selector_all(selector)
            .expect("valid selector")
            .length()
    }

    #[wasm_bindgen_test(async)]
    async fn skills_render_every_category() {
        set_panic_hook();
        let root = test_root("skills-test-root");
        let _handle = yew::Renderer::<SkillsSection>::with_root(root.clone()).render();
        TimeoutFuture::new(0).await;
        assert_eq!(count(&root, ".skills-category"), 4);
        assert_eq!(count(&root, ".skill-chip-no-icon"), 3);
    }

    #[wasm_bindgen_test(async)]
    async fn puzzle_solve_button_completes_board() {
        set_panic_hook();
        let root = test_root("puzzle-test-root");
        let _handle = yew::Renderer::<PuzzleBoard>::with_root(root.clone()).render();
        TimeoutFuture::new(0).await;
        assert_eq!(count(&root, ".puzzle-left .puzzle-tile"), 8);
        assert_eq!(count(&root, ".puzzle-right .puzzle-tile"), 8);

        let button = root
            .query_selector(&format!("#{}", crate::puzzle_view::SOLVE_BUTTON_ID))
            .expect("valid selector")
            .expect("solve button")
            .dyn_into::<HtmlElement>()
            .expect("button element");
        button.click();
        TimeoutFuture::new(0).await;
        assert_eq!(count(&root, ".puzzle-board.is-solved"), 1);
        let first = root
            .query_selector(".puzzle-left .puzzle-tile")
            .expect("valid selector")
            .expect("first tile");
        assert_eq!(first.get_attribute("data-position").as_deref(), Some("top-left"));
    }
}
