//! Deterministic fallback response selection
//!
//! For each category there is a fixed set of response templates parameterized
//! by the trip context. Selection is uniform random among the candidates so a
//! session doesn't repeat the same phrasing, but the RNG is injectable so
//! tests can pin the choice. Every returned response ends with terminal
//! punctuation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::intent::Category;
use crate::domain::TripContext;

/// The candidate responses for a category, fully rendered for this trip
///
/// Every candidate substitutes trip fields through their rendering defaults,
/// so a blank TripContext still produces complete sentences. Public so tests
/// can assert a fallback response is inside the selector's output space.
pub fn candidates(category: Category, trip: &TripContext) -> Vec<String> {
    let dest = trip.destination_display();
    let month = trip.month_display();
    let group = trip.group_display();
    let budget = trip.budget;

    match category {
        Category::Food => vec![
            format!(
                "For great food in {dest}: look for busy local restaurants where residents eat, \
                 ask hotel staff for their personal recommendations, and try traditional dishes \
                 specific to the region!"
            ),
            format!(
                "{dest} rewards hungry travelers on a {budget} budget. Skip the places with \
                 tourist-menu photos, follow the lunchtime crowds, and order whatever the table \
                 next to you is having."
            ),
            format!(
                "Markets are the shortcut to eating well in {dest}: graze the stalls for local \
                 specialties, then book one sit-down meal somewhere the vendors themselves \
                 recommend."
            ),
        ],
        Category::Budget => vec![
            format!(
                "Save money in {dest}: stay in local neighborhoods instead of tourist areas, eat \
                 where locals eat, use public transport, and look for free activities like parks \
                 and markets!"
            ),
            format!(
                "A {budget} budget goes further in {dest} if you buy transit passes instead of \
                 taking taxis, picnic one meal a day, and hunt down free museum days."
            ),
            format!(
                "For {group} people in {dest} the big savings are lodging and transport. Book \
                 early, compare apartment rentals against hotels, and walk whenever the distance \
                 allows."
            ),
        ],
        Category::HiddenGems => vec![
            format!(
                "Hidden gems in {dest}: explore residential neighborhoods, visit local markets \
                 early in the morning, and ask shopkeepers about favorite spots off the beaten \
                 path!"
            ),
            format!(
                "To find the secret side of {dest}, pick a neighborhood with no major sights and \
                 give it a morning. The bakeries, squares, and side streets are the real \
                 discoveries."
            ),
            format!(
                "Ask three locals in {dest} for the one place tourists always miss. You'll get \
                 three different answers and all of them will beat the guidebook."
            ),
        ],
        Category::Timing => vec![
            format!(
                "Best timing for {dest}: visit popular attractions early morning or late \
                 afternoon, and weekdays are generally less crowded than weekends!"
            ),
            format!(
                "In {month}, aim to be at the headline sights of {dest} right at opening. Tour \
                 groups land mid-morning and linger until late afternoon."
            ),
            format!(
                "Plan {dest} around meals: sightsee early, take a long local lunch while the \
                 crowds peak, then head back out when the day-trippers leave."
            ),
        ],
        Category::Transportation => vec![
            format!(
                "Getting around {dest} is easiest on public transport. Grab a day pass and keep \
                 a ride-hailing app as backup for late nights."
            ),
            format!(
                "In {dest}, check whether a transit card covers airport transfers too; it \
                 usually beats taxi fares and works for {group} people with one top-up each."
            ),
            format!(
                "Walk the center of {dest} where you can. Distances are usually shorter than \
                 they look on the map, and you'll find places no bus route passes."
            ),
        ],
        Category::Accommodation => vec![
            format!(
                "For {dest} on a {budget} budget, stay just outside the main tourist zone. One \
                 metro stop away usually means better prices and quieter nights."
            ),
            format!(
                "Book your {dest} lodging early for {month}; the well-located, fairly priced \
                 places sell out first."
            ),
            format!(
                "In {dest}, pick accommodation near a transit hub rather than next to the \
                 sights. You'll spend less and reach more."
            ),
        ],
        Category::Safety => vec![
            format!(
                "{dest} is generally kind to visitors who take the usual precautions: keep \
                 valuables zipped away in crowds, use licensed taxis at night, and save your \
                 hotel's address in the local language."
            ),
            format!(
                "Pickpockets in {dest} work the busy spots, so keep phones and wallets in front \
                 pockets and stay alert around major attractions and transit."
            ),
            format!(
                "For peace of mind in {dest}: split your cards between bags, photograph your \
                 documents, and trust your instincts about quiet streets after dark."
            ),
        ],
        Category::Culture => vec![
            format!(
                "A little local etiquette goes a long way in {dest}. Learn the greetings, follow \
                 the locals' lead on tipping, and dress modestly at religious sites."
            ),
            format!(
                "In {dest}, meal times and customs may differ from home; eating when locals eat \
                 gets you better food and a warmer welcome."
            ),
            format!(
                "Before your {month} trip, read up on the customs of {dest} around queuing, \
                 greetings, and table manners. Small courtesies open doors everywhere."
            ),
        ],
        Category::Weather => vec![
            format!(
                "For {dest} in {month}, pack layers. Mornings and evenings can turn cool even \
                 when afternoons are warm, and a compact rain layer never hurts."
            ),
            format!(
                "Check the {dest} forecast a couple of days before you leave, but assume {month} \
                 can surprise you; comfortable shoes and a light jacket cover most of it."
            ),
            format!(
                "Weather in {dest} can shift through the day. Carry water for warm afternoons \
                 and something warm for after sunset in {month}."
            ),
        ],
        Category::Activity => vec![
            format!(
                "With {group} people in {dest}, mix one headline sight per day with unstructured \
                 wandering. The best stories rarely come from the ticketed attractions."
            ),
            format!(
                "Book the most popular tours and museums of {dest} ahead for {month}, and leave \
                 at least one afternoon free to follow whatever you stumble into."
            ),
            format!(
                "Ask your hosts in {dest} what they would do this week. Seasonal events and \
                 neighborhood festivals beat any fixed itinerary."
            ),
        ],
        Category::General => vec![
            format!(
                "Great question about {dest}! For detailed local insights, ask locals when you \
                 arrive and check recent travel forums."
            ),
            format!(
                "Happy to help with your {dest} trip! The more specific the question, the more \
                 useful I can be: food, timing, neighborhoods, you name it."
            ),
            format!(
                "{dest} has plenty to offer. Tell me what matters most to you and I'll tailor \
                 the suggestions to your trip."
            ),
        ],
    }
}

/// Append a period when a response doesn't already end in `.`, `!`, or `?`
pub(crate) fn ensure_terminal_punctuation(mut text: String) -> String {
    let trimmed_end = text.trim_end().len();
    text.truncate(trimmed_end);
    if !text.ends_with(['.', '!', '?']) {
        text.push('.');
    }
    text
}

/// Picks fallback responses for a session
pub struct ResponseSelector {
    rng: StdRng,
}

impl ResponseSelector {
    /// Selector with an OS-seeded RNG
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Selector with a fixed seed, for deterministic tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a response for the category, rendered for this trip
    ///
    /// Uniform among the category's candidates; always ends with terminal
    /// punctuation.
    pub fn select(&mut self, category: Category, trip: &TripContext) -> String {
        let mut options = candidates(category, trip);
        let idx = self.rng.random_range(0..options.len());
        debug!(%category, idx, "ResponseSelector::select: picked candidate");
        ensure_terminal_punctuation(options.swap_remove(idx))
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}
