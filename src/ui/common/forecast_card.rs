use leptos::prelude::*;

use crate::core::weather::WeatherForecast;

/// Single forecast day
#[component]
pub fn ForecastCard(forecast: WeatherForecast) -> impl IntoView {
    view! {
        <li class="rounded-2xl border border-zinc-200 bg-white/80 p-5 shadow-sm">
            <p class="text-sm uppercase tracking-wide text-emerald-600">{forecast.date_label()}</p>
            <p class="mt-2 text-3xl font-semibold text-zinc-900">
                {format!("{}°C", forecast.temperature_c)}
            </p>
            <p class="text-sm text-zinc-500">{format!("{}°F", forecast.temperature_f)}</p>
            <p class="mt-3 text-sm text-zinc-700">{forecast.summary_or_default().to_string()}</p>
        </li>
    }
}
