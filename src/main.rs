mod contact_form;
mod notice;
mod puzzle_view;
mod skills_view;
mod yew_app;

fn main() {
    console_error_panic_hook::set_once();
    yew_app::run();
}
