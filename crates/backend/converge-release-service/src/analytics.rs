use posthog_rs::Event;

fn capture_async(event: Event) {
    tokio::spawn(async move {
        if let Err(e) = posthog_rs::capture(event).await {
            tracing::debug!("Failed to capture posthog event: {}", e);
        }
    });
}

pub fn track_release_lookup(source: &str, version: Option<&str>) {
    let mut event = Event::new_anon("release_lookup");
    event.insert_prop("source", source).ok();
    if let Some(v) = version {
        event.insert_prop("version", v).ok();
    }
    capture_async(event);
}

pub fn track_release_lookup_failed(tiers_tried: &[&str], error_kind: &str) {
    let mut event = Event::new_anon("release_lookup_failed");
    event.insert_prop("tiers_tried", tiers_tried.join(",")).ok();
    event.insert_prop("error_kind", error_kind).ok();
    capture_async(event);
}

pub fn track_appcast_request(found: bool) {
    let mut event = Event::new_anon("appcast_request");
    event.insert_prop("found", found).ok();
    capture_async(event);
}

pub fn track_install_script_request(served: bool) {
    let mut event = Event::new_anon("install_script_request");
    event.insert_prop("served", served).ok();
    capture_async(event);
}
