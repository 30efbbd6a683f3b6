use crate::blog::highlight_code;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CodeBlockProps {
    pub code: AttrValue,
    #[prop_or_default]
    pub language: Option<AttrValue>,
}

#[function_component(CodeBlock)]
pub fn code_block(CodeBlockProps { code, language }: &CodeBlockProps) -> Html {
    let highlighted = use_memo((code.clone(), language.clone()), |(code, language)| {
        highlight_code(code, language.as_deref())
    });

    let label = language
        .as_ref()
        .map(|language| html! { <span class="code-language">{ language }</span> });

    match &*highlighted {
        Some(markup) => html! {
            <div class="code-block">
                { label }
                { Html::from_html_unchecked(AttrValue::from(markup.clone())) }
            </div>
        },
        None => html! {
            <div class="code-block">
                { label }
                <pre><code>{ code }</code></pre>
            </div>
        },
    }
}
