use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub name: AttrValue,
}

/// Product name heading and the `Home › Products › name` trail.
#[function_component(PageHeader)]
pub fn page_header(p: &Props) -> Html {
    html! {
        <header class="product-header">
            <nav aria-label={t("breadcrumb.label")} class="breadcrumb">
                <a href="/">{ t("breadcrumb.home") }</a>
                <span class="breadcrumb__sep" aria-hidden="true">{ " › " }</span>
                <span>{ t("breadcrumb.products") }</span>
                <span class="breadcrumb__sep" aria-hidden="true">{ " › " }</span>
                <span id="breadcrumb-product-name" aria-current="page">{ p.name.clone() }</span>
            </nav>
            <h1 id="header-product-name" class="product-name">{ p.name.clone() }</h1>
        </header>
    }
}
