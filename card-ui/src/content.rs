// SPDX-License-Identifier: MIT OR Apache-2.0

//! Copy and figures shown on the landing page.
//!
//! Everything here is literal data. Order of each list is display order.

use yew::AttrValue;

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationLink {
    pub label: AttrValue,
    pub href: AttrValue,
}

impl NavigationLink {
    pub fn new(label: impl Into<AttrValue>, href: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub title: AttrValue,
    pub description: AttrValue,
}

impl Feature {
    pub fn new(title: impl Into<AttrValue>, description: impl Into<AttrValue>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewMetric {
    pub label: AttrValue,
    pub value: AttrValue,
}

impl PreviewMetric {
    pub fn new(label: impl Into<AttrValue>, value: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroContent {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub cta_label: AttrValue,
    pub cta_href: AttrValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewContent {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FooterContent {
    pub company: AttrValue,
    pub contact_email: AttrValue,
}

pub fn nav_links() -> Vec<NavigationLink> {
    vec![
        NavigationLink::new("ویژگی‌ها", "#features"),
        NavigationLink::new("قیمت‌گذاری", "#pricing"),
        NavigationLink::new("ورود", "#login"),
        NavigationLink::new("ثبت‌نام", "#signup"),
    ]
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature::new(
            "اشتراک‌گذاری در هرجا",
            "کارت خود را با لینک، QR یا NFC به سادگی و بدون محدودیت با دیگران به اشتراک بگذار.",
        ),
        Feature::new(
            "طراحی قابل سفارشی‌سازی",
            "رنگ، فونت و چیدمان کارت را مطابق هویت برند خود تنظیم کن و همیشه حرفه‌ای دیده شو.",
        ),
        Feature::new(
            "تحلیل و آمار پیشرفته",
            "بدان چه تعداد بازدید داشته‌ای و تصمیم‌های بهتر بازاریابی بگیر.",
        ),
    ]
}

pub fn preview_metrics() -> Vec<PreviewMetric> {
    vec![
        PreviewMetric::new("بازدید هفتگی", "۳۲۰+"),
        PreviewMetric::new("اشتراک‌گذاری", "۹۸"),
        PreviewMetric::new("نرخ تعامل", "۷۲٪"),
    ]
}

pub fn hero() -> HeroContent {
    HeroContent {
        title: "کارت ویزیت دیجیتالی خودت رو بساز!".into(),
        subtitle: "در کمتر از چند دقیقه کارت دیجیتالی خود را طراحی کن، به اشتراک بگذار و هرجا که هستی حرفه‌ای دیده شو.".into(),
        cta_label: "شروع کن".into(),
        cta_href: "#signup".into(),
    }
}

pub fn preview() -> PreviewContent {
    PreviewContent {
        title: "پیش‌نمایش کارت هوشمند".into(),
        subtitle: "تمام اطلاعات کلیدی کسب‌وکار تو در یک کارت زیبا و تعاملی نمایش داده می‌شود. با یک لمس ساده، دیگران شماره تلفن، ایمیل و شبکه‌های اجتماعی تو را ذخیره می‌کنند.".into(),
    }
}

pub fn footer() -> FooterContent {
    FooterContent {
        company: "ایران‌پروس".into(),
        contact_email: "support@iranpros.ir".into(),
    }
}
