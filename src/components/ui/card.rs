use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-1.5 rounded-lg border px-3 py-2.5 shadow-xs transition-colors"}
    clx! {CardTitle, div, "truncate text-sm font-medium leading-tight"}
    clx! {CardContent, div, "line-clamp-2 text-xs text-muted-foreground break-all"}
    clx! {CardFooter, div, "flex items-center justify-between text-[11px] text-muted-foreground"}
}

pub use components::*;
