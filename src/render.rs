use crate::itinerary::{Activity, DailyItinerary, Itinerary};
use console::style;

const ITINERARY_HEADER: &str = "Your personalized travel itinerary";
const EMPTY_HEADER: &str = "Your itinerary will appear here";
const EMPTY_HINT: &str = "Fill in your travel preferences and run `tripcraft plan` to see your personalized plan.";
const NO_ACTIVITIES: &str = "No activities planned for this day.";

/// Render an itinerary as a list of day cards, or the empty-state
/// placeholder when there is nothing to show
pub fn render_itinerary(itinerary: &Itinerary) -> String {
    if itinerary.is_empty() {
        return render_empty_state();
    }

    let mut out = format!("{}\n", style(ITINERARY_HEADER).bold().underlined());
    for day in itinerary.days() {
        out.push('\n');
        out.push_str(&render_day_card(day));
    }
    out
}

pub fn render_empty_state() -> String {
    format!("{}\n{}\n", style(EMPTY_HEADER).bold(), style(EMPTY_HINT).dim())
}

fn render_day_card(day: &DailyItinerary) -> String {
    let heading = match day.title {
        Some(ref title) if !title.is_empty() => format!("Day {}: {}", day.day, title),
        _ => format!("Day {}", day.day),
    };

    let mut card = format!("{}\n", style(heading).cyan().bold());
    if day.activities.is_empty() {
        card.push_str(&format!("  {}\n", style(NO_ACTIVITIES).dim()));
    }
    for activity in &day.activities {
        card.push_str(&render_activity(activity));
    }
    card
}

fn render_activity(activity: &Activity) -> String {
    let cost = activity
        .estimated_cost
        .as_ref()
        .filter(|c| !c.is_empty())
        .map(|c| format!(" {}", style(format!("[{}]", c)).green()))
        .unwrap_or_default();

    format!(
        "  {} {}\n    {}{}\n",
        style("•").cyan(),
        style(&activity.time).bold(),
        activity.description,
        cost
    )
}
