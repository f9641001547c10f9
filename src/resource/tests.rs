//! Tests for resource module

use super::*;
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::pagination::{ListOptions, PageOptions};
use crate::types::Method;
use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT: &str = "AC123";

fn client(server: &MockServer) -> Client {
    let mut config = ClientConfig::new(ACCOUNT, "secret");
    config.api.domain = server.uri();
    config.taskrouter.domain = server.uri();
    config.http.max_retries = 0;
    config.http.rate_limit = None;
    Client::new(config).unwrap()
}

fn incoming_number(sid: &str, number: &str) -> serde_json::Value {
    json!({
        "sid": sid,
        "account_sid": ACCOUNT,
        "friendly_name": "Main line",
        "phone_number": number,
        "voice_url": null,
        "sms_url": "http://example.com/sms",
        "capabilities": { "voice": true, "SMS": true, "MMS": false },
        "date_created": "Mon, 16 Aug 2010 03:45:01 +0000",
        "date_updated": "Mon, 16 Aug 2010 03:45:02 +0000",
    })
}

fn task_queue(sid: &str, name: &str) -> serde_json::Value {
    json!({
        "sid": sid,
        "account_sid": ACCOUNT,
        "workspace_sid": "WS1",
        "friendly_name": name,
        "target_workers": "languages HAS \"english\"",
        "max_reserved_workers": 1,
        "reservation_activity_sid": "WA1",
        "assignment_activity_sid": "WA2",
        "date_created": "2015-08-04T01:31:41Z",
        "date_updated": "2015-08-04T01:31:41Z",
        "url": format!("https://taskrouter.twilio.com/v1/Workspaces/WS1/TaskQueues/{sid}"),
    })
}

// ============================================================================
// Path Tests
// ============================================================================

#[tokio::test]
async fn test_list_and_instance_uris() {
    let server = MockServer::start().await;
    let client = client(&server);

    assert_eq!(
        client.api().messages().uri().unwrap(),
        "/Accounts/AC123/SMS/Messages.json"
    );
    assert_eq!(
        client
            .api()
            .available_phone_numbers("US", NumberKind::TollFree)
            .uri()
            .unwrap(),
        "/Accounts/AC123/AvailablePhoneNumbers/US/TollFree.json"
    );
    assert_eq!(
        client.api().incoming_phone_numbers().get("PN1").uri().unwrap(),
        "/Accounts/AC123/IncomingPhoneNumbers/PN1.json"
    );
    assert_eq!(
        client.taskrouter().task_queues("WS1").get("WQ1").uri().unwrap(),
        "/Workspaces/WS1/TaskQueues/WQ1"
    );
    assert_eq!(client.api().account().uri().unwrap(), "/Accounts/AC123.json");
}

#[tokio::test]
async fn test_blank_path_argument_is_invalid() {
    let server = MockServer::start().await;
    let client = client(&server);

    let err = client.taskrouter().task_queues("").uri().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    let err = client
        .api()
        .outgoing_caller_ids()
        .get(" ")
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_account_fetch_and_update() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": ACCOUNT,
            "friendly_name": "Do you like my friendly name?",
            "status": "active",
            "type": "Full",
            "date_created": "Wed, 04 Aug 2010 21:37:41 +0000",
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC123.json"))
        .and(body_string_contains("FriendlyName=Renamed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": ACCOUNT,
            "friendly_name": "Renamed",
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let account = client.api().account().fetch().await.unwrap();
    assert_eq!(account.account_type.as_deref(), Some("Full"));
    assert_eq!(
        account.date_created,
        Some(Utc.with_ymd_and_hms(2010, 8, 4, 21, 37, 41).unwrap())
    );

    let updated = client
        .api()
        .account()
        .update(&AccountUpdate::friendly_name("Renamed"))
        .await
        .unwrap();
    assert_eq!(updated.friendly_name.as_deref(), Some("Renamed"));
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_messages_list_with_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/SMS/Messages.json"))
        .and(query_param("To", "+15558675309"))
        .and(query_param("DateSent", "2010-08-16"))
        .and(query_param("PageSize", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sms_messages": [{
                "sid": "SM1",
                "from": "+15551230000",
                "to": "+15558675309",
                "body": "hello",
                "status": "sent",
                "date_sent": "Mon, 16 Aug 2010 03:45:01 +0000",
            }],
            "next_page_uri": null,
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let filter = MessageFilter {
        to: Some("+15558675309".to_string()),
        date_sent: NaiveDate::from_ymd_opt(2010, 8, 16),
        ..MessageFilter::default()
    };

    let messages = client
        .api()
        .messages()
        .list(&filter, &ListOptions::new())
        .await
        .unwrap();

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body.as_deref(), Some("hello"));
    assert_eq!(messages[0].date_sent.map(|d| d.day()), Some(16));
}

#[tokio::test]
async fn test_send_sms() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC123/SMS/Messages.json"))
        .and(body_string_contains("From=%2B15551230000"))
        .and(body_string_contains("Body=Hi+there"))
        .and(body_string_contains("StatusCallback="))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sid": "SM2",
            "from": "+15551230000",
            "to": "+15558675309",
            "body": "Hi there",
            "status": "queued",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let message = client
        .api()
        .messages()
        .create(
            &NewMessage::new("+15551230000", "+15558675309", "Hi there")
                .status_callback("http://example.com/status"),
        )
        .await
        .unwrap();

    assert_eq!(message.sid, "SM2");
    assert_eq!(message.status.as_deref(), Some("queued"));
}

#[tokio::test]
async fn test_send_sms_requires_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .api()
        .messages()
        .create(&NewMessage::new("+15551230000", "+15558675309", ""))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { message } if message.contains("Body")));
}

// ============================================================================
// Available Number Tests
// ============================================================================

#[tokio::test]
async fn test_available_mobile_numbers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/AvailablePhoneNumbers/GB/Mobile.json"))
        .and(query_param("Contains", "7700"))
        .and(query_param("SmsEnabled", "true"))
        .and(query_param("PageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "available_phone_numbers": [
                {
                    "friendly_name": "+447700900001",
                    "phone_number": "+447700900001",
                    "iso_country": "GB",
                    "address_requirements": "none",
                    "beta": false,
                    "capabilities": { "voice": true, "SMS": true, "MMS": false },
                },
                {
                    "friendly_name": "+447700900002",
                    "phone_number": "+447700900002",
                    "iso_country": "GB",
                    "capabilities": { "voice": false, "SMS": true, "MMS": false },
                },
            ],
            "uri": "/2010-04-01/Accounts/AC123/AvailablePhoneNumbers/GB/Mobile.json",
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let filter = AvailablePhoneNumberFilter {
        contains: Some("7700".to_string()),
        sms_enabled: Some(true),
        ..AvailablePhoneNumberFilter::default()
    };

    let numbers = client
        .api()
        .available_phone_numbers("GB", NumberKind::Mobile)
        .list(&filter, &ListOptions::new().limit(2))
        .await
        .unwrap();

    assert_eq!(numbers.len(), 2);
    assert!(numbers[0].capabilities.voice);
    assert!(numbers[1].capabilities.sms);
    assert_eq!(numbers[0].iso_country.as_deref(), Some("GB"));
}

#[test]
fn test_number_kind_parse() {
    assert_eq!("local".parse::<NumberKind>().unwrap(), NumberKind::Local);
    assert_eq!("toll-free".parse::<NumberKind>().unwrap(), NumberKind::TollFree);
    assert_eq!("TollFree".parse::<NumberKind>().unwrap(), NumberKind::TollFree);
    assert_eq!("mobile".parse::<NumberKind>().unwrap(), NumberKind::Mobile);
    assert!("landline".parse::<NumberKind>().is_err());
    assert_eq!(NumberKind::TollFree.to_string(), "TollFree");
}

// ============================================================================
// Incoming Number Tests
// ============================================================================

#[tokio::test]
async fn test_incoming_numbers_stream_across_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/IncomingPhoneNumbers.json"))
        .and(query_param("PageSize", "1"))
        .and(query_param("Page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "incoming_phone_numbers": [incoming_number("PN2", "+15550000002")],
            "next_page_uri": null,
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/IncomingPhoneNumbers.json"))
        .and(query_param("PageSize", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "incoming_phone_numbers": [incoming_number("PN1", "+15550000001")],
            "next_page_uri": "/2010-04-01/Accounts/AC123/IncomingPhoneNumbers.json?PageSize=1&Page=1",
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let stream = client
        .api()
        .incoming_phone_numbers()
        .stream(&IncomingPhoneNumberFilter::default(), &ListOptions::new().page_size(1))
        .await
        .unwrap();

    let numbers: Vec<IncomingPhoneNumber> = stream.try_collect().await.unwrap();
    let sids: Vec<&str> = numbers.iter().map(|n| n.sid.as_str()).collect();
    assert_eq!(sids, vec!["PN1", "PN2"]);
    assert!(numbers[0].capabilities.voice);
    assert!(!numbers[0].capabilities.mms);
}

#[tokio::test]
async fn test_incoming_number_update_and_remove() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC123/IncomingPhoneNumbers/PN1.json"))
        .and(body_string_contains("VoiceMethod=POST"))
        .and(body_string_contains("VoiceUrl=http%3A%2F%2Fexample.com%2Fvoice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(incoming_number("PN1", "+15550000001")))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/2010-04-01/Accounts/AC123/IncomingPhoneNumbers/PN1.json"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let number = client.api().incoming_phone_numbers().get("PN1");

    let updated = number
        .update(&NumberSettings::voice_webhook("http://example.com/voice"))
        .await
        .unwrap();
    assert_eq!(updated.sid, "PN1");

    assert!(number.remove().await.unwrap());
}

#[tokio::test]
async fn test_provision_requires_number_or_area_code() {
    let server = MockServer::start().await;
    let client = client(&server);

    let err = client
        .api()
        .incoming_phone_numbers()
        .create(&NewIncomingPhoneNumber::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_provision_by_area_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC123/IncomingPhoneNumbers.json"))
        .and(body_string_contains("AreaCode=415"))
        .and(body_string_contains("SmsMethod=POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(incoming_number("PN9", "+14155550009")))
        .mount(&server)
        .await;

    let client = client(&server);
    let number = client
        .api()
        .incoming_phone_numbers()
        .create(
            &NewIncomingPhoneNumber::area_code("415")
                .with_settings(NumberSettings::sms_webhook("http://example.com/sms")),
        )
        .await
        .unwrap();

    assert_eq!(number.phone_number, "+14155550009");
}

#[test]
fn test_number_settings_params() {
    let settings = NumberSettings {
        friendly_name: Some("Support".to_string()),
        voice_caller_id_lookup: Some(true),
        status_callback_method: Some(Method::GET),
        ..NumberSettings::default()
    };

    let params = settings.to_params().unwrap();
    assert_eq!(params.len(), 3);
    assert_eq!(params["VoiceCallerIdLookup"], "true");
    assert_eq!(params["StatusCallbackMethod"], "GET");
}

// ============================================================================
// Outgoing Caller ID Tests
// ============================================================================

#[tokio::test]
async fn test_add_caller_id_returns_validation_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC123/OutgoingCallerIds.json"))
        .and(body_string_contains("PhoneNumber=%2B15558675309"))
        .and(body_string_contains("CallDelay=30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account_sid": ACCOUNT,
            "phone_number": "+15558675309",
            "friendly_name": "Office",
            "validation_code": 123456,
            "call_sid": "CA1",
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let request = NewCallerId {
        friendly_name: Some("Office".to_string()),
        call_delay: Some(30),
        ..NewCallerId::new("+15558675309")
    };

    let validation = client
        .api()
        .outgoing_caller_ids()
        .create(&request)
        .await
        .unwrap();

    assert_eq!(validation.validation_code, "123456");
    assert_eq!(validation.call_sid.as_deref(), Some("CA1"));
}

#[test]
fn test_caller_id_call_delay_limit() {
    let request = NewCallerId {
        call_delay: Some(61),
        ..NewCallerId::new("+15558675309")
    };
    let err = request.to_params().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    let request = NewCallerId {
        call_delay: Some(60),
        ..NewCallerId::new("+15558675309")
    };
    assert_eq!(request.to_params().unwrap()["CallDelay"], "60");
}

#[tokio::test]
async fn test_caller_id_list_update_remove() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/OutgoingCallerIds.json"))
        .and(query_param("FriendlyName", "Office"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "outgoing_caller_ids": [{
                "sid": "PN5",
                "friendly_name": "Office",
                "phone_number": "+15558675309",
            }],
            "next_page_uri": null,
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC123/OutgoingCallerIds/PN5.json"))
        .and(body_string_contains("FriendlyName=Desk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "PN5",
            "friendly_name": "Desk",
            "phone_number": "+15558675309",
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/2010-04-01/Accounts/AC123/OutgoingCallerIds/PN5.json"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client(&server);
    let caller_ids = client.api().outgoing_caller_ids();
    let filter = CallerIdFilter {
        friendly_name: Some("Office".to_string()),
        ..CallerIdFilter::default()
    };

    let listed = caller_ids.list(&filter, &ListOptions::new()).await.unwrap();
    assert_eq!(listed.len(), 1);

    let context = caller_ids.get(listed[0].sid.clone());
    let updated = context
        .update(&CallerIdUpdate {
            friendly_name: Some("Desk".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(updated.friendly_name.as_deref(), Some("Desk"));
    assert!(context.remove().await.unwrap());
}

// ============================================================================
// Recording Tests
// ============================================================================

fn recording(sid: &str) -> serde_json::Value {
    json!({
        "sid": sid,
        "account_sid": ACCOUNT,
        "call_sid": "CA1",
        "duration": "6",
        "api_version": "2010-04-01",
        "date_created": "Mon, 22 Aug 2011 20:58:45 +0000",
        "date_updated": "Mon, 22 Aug 2011 20:58:46 +0000",
        "uri": format!("/2010-04-01/Accounts/{ACCOUNT}/Recordings/{sid}.json"),
    })
}

#[tokio::test]
async fn test_recording_fetch_and_remove() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Recordings/RE1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recording("RE1")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/2010-04-01/Accounts/AC123/Recordings/RE1.json"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let context = client.api().recordings().get("RE1");
    assert_eq!(
        context.uri().unwrap(),
        "/Accounts/AC123/Recordings/RE1.json"
    );

    let fetched = context.fetch().await.unwrap();
    assert_eq!(fetched.call_sid.as_deref(), Some("CA1"));
    assert_eq!(fetched.duration.as_deref(), Some("6"));
    assert_eq!(fetched.date_created.map(|d| d.year()), Some(2011));

    assert!(context.remove().await.unwrap());
}

#[tokio::test]
async fn test_recordings_list_by_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Recordings.json"))
        .and(query_param("CallSid", "CA1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recordings": [recording("RE1"), recording("RE2")],
            "next_page_uri": null,
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let filter = RecordingFilter {
        call_sid: Some("CA1".to_string()),
    };
    let recordings = client
        .api()
        .recordings()
        .list(&filter, &ListOptions::new())
        .await
        .unwrap();

    let sids: Vec<_> = recordings.iter().map(|r| r.sid.as_str()).collect();
    assert_eq!(sids, vec!["RE1", "RE2"]);
}

// ============================================================================
// Task Queue Tests
// ============================================================================

#[tokio::test]
async fn test_task_queues_follow_meta_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/Workspaces/WS1/TaskQueues"))
        .and(query_param("PageToken", "PT1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "key": "task_queues", "next_page_url": null, "page_size": 2 },
            "task_queues": [task_queue("WQ3", "Billing")],
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/Workspaces/WS1/TaskQueues"))
        .and(query_param("FriendlyName", "Support"))
        .and(query_param("PageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {
                "key": "task_queues",
                "next_page_url": format!("{}/v1/Workspaces/WS1/TaskQueues?PageSize=2&PageToken=PT1", server.uri()),
                "page_size": 2,
            },
            "task_queues": [task_queue("WQ1", "Support"), task_queue("WQ2", "Sales")],
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let filter = TaskQueueFilter {
        friendly_name: Some("Support".to_string()),
        ..TaskQueueFilter::default()
    };

    let queues = client
        .taskrouter()
        .task_queues("WS1")
        .list(&filter, &ListOptions::new().page_size(2))
        .await
        .unwrap();

    let names: Vec<&str> = queues.iter().map(|q| q.friendly_name.as_str()).collect();
    assert_eq!(names, vec!["Support", "Sales", "Billing"]);
    assert_eq!(
        queues[0].date_created,
        Some(Utc.with_ymd_and_hms(2015, 8, 4, 1, 31, 41).unwrap())
    );
}

#[tokio::test]
async fn test_task_queue_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/Workspaces/WS1/TaskQueues"))
        .and(query_param("PageToken", "PT7"))
        .and(query_param("PageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "key": "task_queues", "next_page_url": "https://taskrouter.twilio.com/v1/Workspaces/WS1/TaskQueues?PageToken=PT8" },
            "task_queues": [task_queue("WQ7", "Night")],
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let page = client
        .taskrouter()
        .task_queues("WS1")
        .page(
            &TaskQueueFilter::default(),
            &PageOptions::with_page_size(10).page_token("PT7"),
        )
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert!(page.has_next());
}

#[tokio::test]
async fn test_task_queue_create_fetch_update_remove() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/Workspaces/WS1/TaskQueues"))
        .and(body_string_contains("FriendlyName=Support"))
        .and(body_string_contains("ReservationActivitySid=WA1"))
        .and(body_string_contains("AssignmentActivitySid=WA2"))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_queue("WQ1", "Support")))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/Workspaces/WS1/TaskQueues/WQ1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_queue("WQ1", "Support")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/Workspaces/WS1/TaskQueues/WQ1"))
        .and(body_string_contains("MaxReservedWorkers=5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_queue("WQ1", "Support")))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/Workspaces/WS1/TaskQueues/WQ1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client(&server);
    let queues = client.taskrouter().task_queues("WS1");

    let created = queues
        .create(&NewTaskQueue::new("Support", "WA1", "WA2"))
        .await
        .unwrap();
    assert_eq!(created.sid, "WQ1");

    let queue = queues.get("WQ1");
    assert_eq!(queue.fetch().await.unwrap().max_reserved_workers, Some(1));

    let update = TaskQueueUpdate {
        max_reserved_workers: Some(5),
        ..TaskQueueUpdate::default()
    };
    assert_eq!(queue.update(&update).await.unwrap().sid, "WQ1");
    assert!(queue.remove().await.unwrap());
}

#[tokio::test]
async fn test_task_queue_statistics_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/Workspaces/WS1/TaskQueues/WQ1/Statistics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account_sid": ACCOUNT,
            "workspace_sid": "WS1",
            "task_queue_sid": "WQ1",
            "cumulative": { "tasks_entered": 12, "reservations_accepted": 9 },
            "realtime": { "total_tasks": 3, "longest_task_waiting_age": 42 },
            "url": "https://taskrouter.twilio.com/v1/Workspaces/WS1/TaskQueues/WQ1/Statistics",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let statistics = client
        .taskrouter()
        .task_queues("WS1")
        .get("WQ1")
        .statistics();
    assert_eq!(
        statistics.uri().unwrap(),
        "/Workspaces/WS1/TaskQueues/WQ1/Statistics"
    );

    let fetched = statistics.fetch().await.unwrap();
    assert_eq!(fetched.task_queue_sid, "WQ1");
    assert_eq!(fetched.cumulative["tasks_entered"], 12);
    assert_eq!(fetched.realtime["longest_task_waiting_age"], 42);
}

#[test]
fn test_new_task_queue_requires_activities() {
    let err = NewTaskQueue::new("Support", "", "WA2").to_params().unwrap_err();
    assert!(
        matches!(err, Error::InvalidArgument { message } if message.contains("ReservationActivitySid"))
    );
}

#[tokio::test]
async fn test_http_error_surfaces_as_fetch_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/Workspaces/WS1/TaskQueues"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Authenticate"))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .taskrouter()
        .task_queues("WS1")
        .list(&TaskQueueFilter::default(), &ListOptions::new())
        .await
        .unwrap_err();

    match err {
        Error::FetchFailed { source, .. } => {
            assert!(matches!(*source, Error::HttpStatus { status: 401, .. }));
        }
        other => panic!("Expected FetchFailed, got {other:?}"),
    }
}
