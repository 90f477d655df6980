use crate::utils::viewport::use_in_view;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger in seconds.
    #[prop_or_default]
    pub delay: f64,
}

/// Fades its children in the first time they scroll into view.
#[function_component]
pub fn Reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "0px");
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |in_view: &bool| {
                if *in_view {
                    revealed.set(true);
                }
                || ()
            },
            in_view,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*revealed).then_some("revealed"), props.class.clone())}
            style={format!("transition-delay: {}s;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
