/// All user-facing strings in one place.
pub struct UiText {
    pub window_title: &'static str,
    pub brand_heading: &'static str,
    pub volume_heading: &'static str,
    pub volume_prompt: &'static str,
    pub overview_heading: &'static str,
    pub overview_blurb: &'static str,
    pub overview_brand_column: &'static str,
    pub overview_listings_column: &'static str,
    pub overview_median_column: &'static str,
    pub price_heading: &'static str,
    pub count_heading: &'static str,
    pub distribution_heading: &'static str,
    pub sim_lock_heading: &'static str,
    pub restriction_heading: &'static str,
    pub empty_selection: &'static str,
    pub empty_table: &'static str,
    pub plot_price_axis: &'static str,
    pub plot_count_axis: &'static str,
    pub plot_date_axis: &'static str,
    pub plot_month_axis: &'static str,
    pub listings_label: &'static str,
    pub window_label: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Smartphone Resale Market",
    brand_heading: "Brand",
    volume_heading: "Storage",
    volume_prompt: "Choose a storage size",
    overview_heading: "Market overview",
    overview_blurb: "Secondhand smartphone listings from flea-market sites over the past year.",
    overview_brand_column: "Brand",
    overview_listings_column: "Listings",
    overview_median_column: "Median price",
    price_heading: "Sale price",
    count_heading: "Listings per month",
    distribution_heading: "Price distribution",
    sim_lock_heading: "SIM lock",
    restriction_heading: "Network restriction",
    empty_selection: "No listings for this selection in the past year.",
    empty_table: "No listings in the past year.",
    plot_price_axis: "Price (¥)",
    plot_count_axis: "Listings",
    plot_date_axis: "Week ending",
    plot_month_axis: "Month",
    listings_label: "Listings",
    window_label: "Window",
};
