use catalog::series::{self, Status};
use catalog::stats;
use catalog::wallpaper::{self, Category, Filter};
use catalog::{Error, Language, Series, Store, ValidationError, Wallpaper};

use std::path::PathBuf;

fn data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn ids<'a>(series: impl IntoIterator<Item = &'a Series>) -> Vec<u32> {
    series.into_iter().map(|series| series.id.get()).collect()
}

#[tokio::test]
async fn hindi_tab_lists_seed_in_order() {
    let store = Store::load().await.unwrap();

    let tab = store.series_tab(Language::Hindi);

    assert_eq!(ids(&tab.series), [1, 2]);
    assert_eq!(tab.count(), 2);
}

#[tokio::test]
async fn language_tabs_partition_series() {
    let store = Store::load().await.unwrap();
    let counts = stats::count_by_language(&store);

    for language in Language::ALL {
        let selection = store.select_series(language);

        assert!(selection.iter().all(|series| series.language == language));
        assert_eq!(selection.len(), counts[&language]);
    }

    assert_eq!(counts.values().sum::<usize>(), store.series().len());
}

#[tokio::test]
async fn unknown_keys_select_nothing() {
    let store = Store::load().await.unwrap();

    assert!(store.select_series_by_key("french").is_empty());
    assert!(store.select_wallpapers_by_key("Portraits").is_empty());
    assert_eq!(ids(&store.select_series_by_key("English")), [3, 4]);
}

#[tokio::test]
async fn gallery_statistics() {
    let store = Store::load().await.unwrap();
    let counts = stats::count_by_category(&store);

    assert_eq!(counts[&Filter::All], 6);
    assert_eq!(counts[&Filter::Only(Category::Nature)], 3);
    assert_eq!(counts[&Filter::Only(Category::Urban)], 1);
    assert_eq!(counts[&Filter::Only(Category::Abstract)], 1);
    assert_eq!(counts[&Filter::Only(Category::Space)], 1);

    let gallery = store.wallpaper_gallery(Filter::All);

    assert_eq!(gallery.summary.featured, 3);
    assert_eq!(gallery.summary.downloads, 7417);
    assert_eq!(stats::featured_count(store.wallpapers()), 3);
    assert_eq!(stats::total_downloads(store.wallpapers()), 7417);
}

#[tokio::test]
async fn category_filter_keeps_order() {
    let store = Store::load().await.unwrap();

    for filter in Filter::ALL {
        let selection = store.select_wallpapers(filter);

        assert!(selection.iter().all(|wallpaper| filter.matches(wallpaper)));
    }

    let nature: Vec<_> = store
        .select_wallpapers(Filter::Only(Category::Nature))
        .iter()
        .map(|wallpaper| wallpaper.id.get())
        .collect();

    assert_eq!(nature, [1, 2, 5]);
    assert_eq!(
        store.select_wallpapers(Filter::All).matches(),
        store.wallpapers()
    );
}

#[tokio::test]
async fn series_progress() {
    let store = Store::load().await.unwrap();

    let mindful = store.series_by_id(series::Id::from(3)).unwrap();
    let bedtime = store.series_by_id(series::Id::from(4)).unwrap();

    assert_eq!(mindful.progress().percent(), 75);
    assert_eq!(mindful.progress().to_string(), "6/8");
    assert_eq!(bedtime.progress().percent(), 0);
    assert_eq!(stats::count_by_status(store.series(), Status::Published), 2);
}

#[tokio::test]
async fn load_from_directory_matches_embedded_seed() {
    let embedded = Store::load().await.unwrap();
    let loaded = Store::load_from(data()).await.unwrap();

    assert_eq!(embedded.series(), loaded.series());
    assert_eq!(embedded.wallpapers(), loaded.wallpapers());
}

#[tokio::test]
async fn load_from_missing_directory_fails() {
    assert!(Store::load_from(data().join("missing")).await.is_err());
}

#[test]
fn duplicate_ids_are_rejected() {
    let wallpaper = Wallpaper {
        id: wallpaper::Id::from(1),
        title: "Dunes".to_owned(),
        category: Category::Nature,
        featured: false,
        downloads: 0,
        url: "dunes.jpg".to_owned(),
    };

    let result = Store::new(Vec::<Series>::new(), vec![wallpaper.clone(), wallpaper]);

    assert_eq!(
        result.err(),
        Some(Error::DuplicateWallpaper(wallpaper::Id::from(1)))
    );
}

#[test]
fn overshooting_series_are_kept() {
    let series = Series {
        id: series::Id::from(1),
        title: "Overshoot".to_owned(),
        description: String::new(),
        language: Language::English,
        status: Status::Draft,
        total_chapters: 2,
        published_chapters: 3,
        total_duration: "10m".to_owned(),
    };

    let store = Store::new(vec![series], Vec::<Wallpaper>::new()).unwrap();

    assert_eq!(store.series()[0].progress().percent(), 100);
    assert!(store.select_wallpapers(Filter::All).is_empty());
}

#[tokio::test]
async fn creating_assigns_next_id_without_storing() {
    let store = Store::load().await.unwrap();

    let series = store
        .create_series(series::New {
            title: "Podcast Hour".to_owned(),
            description: "Weekly talks".to_owned(),
            language: Language::English,
            status: Status::Draft,
            total_chapters: 10,
            published_chapters: 0,
            total_duration: "5h".to_owned(),
        })
        .unwrap();

    let wallpaper = store
        .create_wallpaper(wallpaper::New {
            title: "Nebula".to_owned(),
            category: Category::Space,
            featured: false,
            url: "nebula.jpg".to_owned(),
        })
        .unwrap();

    assert_eq!(series.id.get(), 5);
    assert_eq!(wallpaper.id.get(), 7);
    assert!(store.series_by_id(series.id).is_none());
    assert!(store.wallpaper_by_id(wallpaper.id).is_none());
    assert_eq!(store.series().len(), 4);
    assert_eq!(store.wallpapers().len(), 6);
}

#[test]
fn creating_in_empty_store_starts_at_one() {
    let store = Store::new(Vec::<Series>::new(), Vec::<Wallpaper>::new()).unwrap();

    let wallpaper = store
        .create_wallpaper(wallpaper::New {
            title: "First".to_owned(),
            category: Category::Urban,
            featured: true,
            url: "first.jpg".to_owned(),
        })
        .unwrap();

    assert_eq!(wallpaper.id.get(), 1);
    assert_eq!(
        store.create_wallpaper(wallpaper::New {
            title: String::new(),
            category: Category::Urban,
            featured: true,
            url: "first.jpg".to_owned(),
        }),
        Err(ValidationError::EmptyTitle)
    );
}

#[test]
fn duplicate_series_ids_are_rejected() {
    let series = Series {
        id: series::Id::from(2),
        title: "Kahaniyan".to_owned(),
        description: String::new(),
        language: Language::Hindi,
        status: Status::Published,
        total_chapters: 3,
        published_chapters: 3,
        total_duration: "1h".to_owned(),
    };
    let english = Series {
        language: Language::English,
        ..series.clone()
    };

    let result = Store::new(vec![series, english], Vec::<Wallpaper>::new());

    assert_eq!(result.err(), Some(Error::DuplicateSeries(series::Id::from(2))));
}

#[test]
fn creating_past_the_last_id_fails() {
    let wallpaper = Wallpaper {
        id: wallpaper::Id::from(u32::MAX),
        title: "Last".to_owned(),
        category: Category::Abstract,
        featured: false,
        downloads: 12,
        url: "last.jpg".to_owned(),
    };
    let series = Series {
        id: series::Id::from(u32::MAX),
        title: "Last".to_owned(),
        description: String::new(),
        language: Language::English,
        status: Status::Draft,
        total_chapters: 1,
        published_chapters: 0,
        total_duration: "5m".to_owned(),
    };

    let store = Store::new(vec![series], vec![wallpaper]).unwrap();

    assert!(store.wallpaper_by_id(wallpaper::Id::from(u32::MAX)).is_some());
    assert_eq!(
        store.create_wallpaper(wallpaper::New {
            title: "Overflow".to_owned(),
            category: Category::Space,
            featured: false,
            url: "overflow.jpg".to_owned(),
        }),
        Err(ValidationError::IdsExhausted)
    );
    assert_eq!(
        store.create_series(series::New {
            title: "Overflow".to_owned(),
            description: String::new(),
            language: Language::Hindi,
            status: Status::Draft,
            total_chapters: 1,
            published_chapters: 0,
            total_duration: "5m".to_owned(),
        }),
        Err(ValidationError::IdsExhausted)
    );
}
