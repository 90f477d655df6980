use crate::config::EMBED_VIEWPORT_MARGIN;
use crate::embed::controller::{EmbedController, EmbedView};
use crate::embed::latch::{LatchInputs, LoadLatch};
use crate::utils::viewport::{use_device_class, use_in_view};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SketchfabEmbedProps {
    pub url: AttrValue,
    #[prop_or_else(|| AttrValue::from("Pagani Model"))]
    pub title: AttrValue,
    /// Driven by the parent; a hidden embed is never requested and a loaded
    /// one is only hidden from painting.
    #[prop_or(true)]
    pub visible: bool,
    #[prop_or_default]
    pub thumbnail_only: bool,
    #[prop_or_default]
    pub thumbnail: Option<AttrValue>,
    /// Crops the viewer's own chrome by overscanning the iframe vertically.
    #[prop_or_default]
    pub hide_ui: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn SketchfabEmbed(props: &SketchfabEmbedProps) -> Html {
    let container = use_node_ref();
    let in_view = use_in_view(container.clone(), EMBED_VIEWPORT_MARGIN);
    let device = use_device_class();
    let latch = use_reducer(LoadLatch::default);
    let controller = use_memo(
        |(url, thumbnail): &(AttrValue, Option<AttrValue>)| {
            EmbedController::new(url, thumbnail.as_deref())
        },
        (props.url.clone(), props.thumbnail.clone()),
    );

    {
        let latch = latch.clone();
        use_effect_with_deps(
            move |inputs: &LatchInputs| {
                latch.dispatch(*inputs);
                || ()
            },
            LatchInputs {
                visible: props.visible,
                in_view,
                thumbnail_only: props.thumbnail_only,
            },
        );
    }

    let model_id = controller.model_id().map(|id| AttrValue::from(id.to_string()));
    let view = controller.view(&latch, device, props.visible, props.thumbnail_only);

    let content = match view {
        EmbedView::Thumbnail(src) => html! {
            <img class="embed-thumbnail" src={src} alt={props.title.clone()} loading="lazy" />
        },
        EmbedView::Live { src, painted } => {
            let frame_class = classes!(
                "embed-live",
                props.hide_ui.then_some("embed-live-cropped"),
                (!painted).then_some("embed-live-hidden"),
            );
            html! {
                <iframe
                    title={props.title.clone()}
                    class={frame_class}
                    frameborder="0"
                    allowfullscreen=true
                    allow="autoplay; fullscreen; xr-spatial-tracking"
                    src={src}
                />
            }
        }
        EmbedView::Empty => html! {},
    };

    html! {
        <div ref={container} class={classes!("embed-frame", props.class.clone())} data-model={model_id}>
            <style>{EMBED_CSS}</style>
            { content }
        </div>
    }
}

const EMBED_CSS: &str = r#"
    .embed-frame {
        position: relative;
        width: 100%;
        height: 100%;
        overflow: hidden;
    }
    .embed-thumbnail {
        width: 100%;
        height: 100%;
        object-fit: cover;
        display: block;
    }
    .embed-live {
        position: absolute;
        left: 0;
        top: 0;
        width: 100%;
        height: 100%;
        border: none;
    }
    .embed-live-cropped {
        top: -100px;
        height: calc(100% + 200px);
    }
    .embed-live-hidden {
        visibility: hidden;
    }
"#;
