use yew_arcade_scenes::components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
