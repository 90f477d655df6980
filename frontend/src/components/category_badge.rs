use crate::models::vehicle::Category;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryBadgeProps {
    pub category: Category,
}

#[function_component]
pub fn CategoryBadge(props: &CategoryBadgeProps) -> Html {
    html! {
        <span class="category-badge">
            <span class="category-dot" style={format!("background: {};", props.category.badge_color())}></span>
            { props.category.label() }
        </span>
    }
}
