//! Toast Component

use leptos::prelude::*;

use crate::context::{AppContext, ToastKind};

#[component]
pub fn ToastView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast success",
                ToastKind::Error => "toast error",
            };
            view! { <div class=class role="status">{toast.message}</div> }
        })
    }
}
