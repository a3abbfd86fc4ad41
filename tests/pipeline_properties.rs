use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

use taskboard::models::{NormalizedTask, OwnerGroup, ProjectStatus, RawRecord};
use taskboard::pipeline::filter::{by_client, by_group, by_kind, by_recency, Predicate};
use taskboard::pipeline::{aggregate, normalize_all, Selection};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
}

fn optional(values: &'static [&'static str]) -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![Just(None), prop::sample::select(values).prop_map(Some)]
}

fn date_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => optional(&["2024-01-01", "2024-01-10", "2023-12-20", "2024-01-05", "2024-01-30"])
            .prop_map(|d| d.map(str::to_string)),
        1 => prop::sample::select(vec![
            "+262142-12-31",
            "-262143-01-01",
            "+262142-12-31T23:59:59Z",
            "262142-12-31 23:59:59",
            "9999-12-31T23:59:59.999Z",
            "0000-01-01",
        ])
        .prop_map(|d| Some(d.to_string())),
        1 => ".{0,24}".prop_map(Some),
    ]
}

fn raw_record() -> impl Strategy<Value = RawRecord> {
    (
        optional(&["ACME", "Globex", "Initech"]),
        optional(&["P1", "P2"]),
        optional(&["Ana", "Bia", "Caio"]),
        date_text(),
        date_text(),
        optional(&["Concluída", "Backlog", "Em Produção", "Não iniciada", "Revisão"]),
        optional(&[
            "Criação / Social",
            "Criação / Vídeo / Reels",
            "Mídia",
            "Bruno Prosperi",
            "Carol / Suporte",
            "Ana Luisa Andre",
            "Setor Fantasma",
        ]),
        optional(&["Tarefa", "Subtarefa"]),
    )
        .prop_map(|(client, project, responsible, start, end, status, path, tipo)| {
            let mut fields = Map::new();
            let pairs = [
                ("client", client),
                ("project", project),
                ("responsible", responsible),
                ("PipelineStepTitle", status),
                ("group_subgroup", path),
                ("tipo", tipo),
            ];
            for (key, value) in pairs {
                if let Some(v) = value {
                    fields.insert(key.to_string(), json!(v));
                }
            }
            for (key, value) in [("start", start), ("end", end)] {
                if let Some(v) = value {
                    fields.insert(key.to_string(), json!(v));
                }
            }
            RawRecord::new(fields)
        })
}

fn tasks() -> impl Strategy<Value = Vec<NormalizedTask>> {
    prop::collection::vec(raw_record(), 0..24).prop_map(|raws| normalize_all(&raws, now()))
}

fn as_set(tasks: &[NormalizedTask]) -> Vec<String> {
    let mut keys: Vec<String> = tasks
        .iter()
        .map(|t| serde_json::to_string(t).unwrap())
        .collect();
    keys.sort();
    keys
}

fn run_in_order(tasks: &[NormalizedTask], predicates: &[&Predicate<'_, NormalizedTask>]) -> Vec<NormalizedTask> {
    predicates.iter().fold(tasks.to_vec(), |remaining, keep| {
        remaining.into_iter().filter(|t| keep(t)).collect()
    })
}

proptest! {
    #[test]
    fn normalized_tasks_always_have_a_group(t in tasks()) {
        for task in &t {
            prop_assert!(OwnerGroup::ALL.contains(&task.owner_group));
        }
    }

    #[test]
    fn normalize_accepts_any_clock(raws in prop::collection::vec(raw_record(), 0..8), secs in any::<i64>()) {
        let clock = DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or(DateTime::<Utc>::MAX_UTC);
        let normalized = normalize_all(&raws, clock);
        prop_assert_eq!(normalized.len(), raws.len());
        for (raw, task) in raws.iter().zip(&normalized) {
            if !raw.fields().contains_key("end") {
                prop_assert!(task.due_date >= task.start_date);
            }
        }
    }

    #[test]
    fn recency_accepts_any_window(t in tasks(), window in any::<u32>()) {
        let cutoff = now()
            .checked_sub_signed(chrono::Duration::days(i64::from(window)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let recent = by_recency(window, now());
        let expected: Vec<NormalizedTask> = t.iter().filter(|task| task.start_date >= cutoff).cloned().collect();
        prop_assert_eq!(run_in_order(&t, &[&recent]), expected);
    }

    #[test]
    fn widest_recency_window_keeps_everything(t in tasks()) {
        let recent = by_recency(u32::MAX, now());
        prop_assert_eq!(run_in_order(&t, &[&recent]), t);
    }

    #[test]
    fn client_group_kind_filters_commute(
        t in tasks(),
        client in prop_oneof![Just("todos"), Just("ACME"), Just("Globex")],
        group in prop::sample::select(vec![
            Selection::All,
            Selection::Only(OwnerGroup::Creation),
            Selection::Only(OwnerGroup::Operations),
            Selection::Only(OwnerGroup::Other),
        ]),
        include_tasks in any::<bool>(),
        include_subtasks in any::<bool>(),
    ) {
        let client = Selection::parse(client);
        let c = by_client(&client);
        let g = by_group(group);
        let k = by_kind(include_tasks, include_subtasks);

        let expected = as_set(&run_in_order(&t, &[&c, &g, &k]));
        prop_assert_eq!(&as_set(&run_in_order(&t, &[&k, &g, &c])), &expected);
        prop_assert_eq!(&as_set(&run_in_order(&t, &[&g, &c, &k])), &expected);
        prop_assert_eq!(&as_set(&run_in_order(&t, &[&k, &c, &g])), &expected);
    }

    #[test]
    fn all_sentinel_filters_are_identity(t in tasks()) {
        let all = Selection::parse("todos");
        let c = by_client(&all);
        let g = by_group(Selection::All);
        let k = by_kind(true, true);
        prop_assert_eq!(run_in_order(&t, &[&c, &g, &k]), t);
    }

    #[test]
    fn aggregation_invariants(t in tasks()) {
        for p in aggregate(&t, now()) {
            prop_assert!(p.progress <= 100);
            prop_assert_eq!(p.status == ProjectStatus::Completed, p.progress == 100);
            prop_assert!(p.groups.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(p.responsibles.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(!p.tasks.is_empty());
            prop_assert!(p.tasks.iter().all(|task| task.start_date >= p.start && task.due_date <= p.end));
            prop_assert_eq!(p.priority, p.tasks.iter().map(|task| task.priority).max().unwrap());
        }
    }

    #[test]
    fn aggregation_keeps_every_keyed_task(t in tasks()) {
        let keyed = t.iter().filter(|task| task.client.is_some() && task.project.is_some()).count();
        let folded: usize = aggregate(&t, now()).iter().map(|p| p.tasks.len()).sum();
        prop_assert_eq!(keyed, folded);
    }
}

#[test]
fn raw_value_shape_is_preserved() {
    let raw: RawRecord = serde_json::from_value(json!({"client": "A", "extra": [1, 2]})).unwrap();
    assert_eq!(raw.fields().get("extra"), Some(&Value::from(vec![1, 2])));
}
