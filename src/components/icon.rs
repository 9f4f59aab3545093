use yew::prelude::*;

pub struct Icon;

#[derive(Debug, Clone, PartialEq)]
pub enum IconStyle {
    Filled,
    Outlined,
}

#[derive(Clone, PartialEq, Properties)]
pub struct IconProperties {
    pub name: String,
    #[prop_or(IconStyle::Filled)]
    pub style: IconStyle,
}

impl Component for Icon {
    type Message = ();
    type Properties = IconProperties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        match props.style {
            IconStyle::Filled => {
                html! {<span class="icon"><span class="material-icons">{&props.name}</span></span>}
            }
            IconStyle::Outlined => {
                html! {<span class="icon"><span class="material-icons-outlined">{&props.name}</span></span>}
            }
        }
    }
}
