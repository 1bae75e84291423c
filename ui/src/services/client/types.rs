// Wire types shared with the remote donor service
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::{Date, OffsetDateTime};

const NANOS_PER_DAY: i128 = 86_400 * 1_000_000_000;

/// Server-assigned donor handle
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct DonorId(pub u64);

impl fmt::Display for DonorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Point in time as transmitted by the service: nanoseconds since the Unix epoch
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self::from_datetime(OffsetDateTime::now_utc()).unwrap_or(Self(i64::MAX))
    }

    /// `None` outside the range of an `i64` nanosecond count (1677 to 2262)
    pub fn from_datetime(datetime: OffsetDateTime) -> Option<Self> {
        i64::try_from(datetime.unix_timestamp_nanos()).ok().map(Self)
    }

    /// Midnight UTC at the start of `date`
    pub fn from_date(date: Date) -> Option<Self> {
        Self::from_datetime(date.midnight().assume_utc())
    }

    pub fn to_datetime(self) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0))
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }

    /// Saturates at the ends of the representable range
    pub fn plus_days(self, days: i64) -> Self {
        let nanos = i128::from(self.0) + i128::from(days) * NANOS_PER_DAY;
        Self(nanos.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    /// Whole days from `now` until this instant, rounded up
    pub fn days_after(self, now: OffsetDateTime) -> i64 {
        let diff = i128::from(self.0) - now.unix_timestamp_nanos();
        let days = diff / NANOS_PER_DAY;
        if diff % NANOS_PER_DAY > 0 {
            (days + 1) as i64
        } else {
            days as i64
        }
    }
}

/// ABO/Rh blood group, listed in display precedence order
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BloodGroup {
    #[serde(rename = "A_pos")]
    APositive,
    #[serde(rename = "A_neg")]
    ANegative,
    #[serde(rename = "B_pos")]
    BPositive,
    #[serde(rename = "B_neg")]
    BNegative,
    #[serde(rename = "AB_pos")]
    AbPositive,
    #[serde(rename = "AB_neg")]
    AbNegative,
    #[serde(rename = "O_pos")]
    OPositive,
    #[serde(rename = "O_neg")]
    ONegative,
}

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    /// Position in the tie-break order used by the donor list
    pub fn precedence(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BloodGroup::APositive => "A Positive (A+)",
            BloodGroup::ANegative => "A Negative (A-)",
            BloodGroup::BPositive => "B Positive (B+)",
            BloodGroup::BNegative => "B Negative (B-)",
            BloodGroup::AbPositive => "AB Positive (AB+)",
            BloodGroup::AbNegative => "AB Negative (AB-)",
            BloodGroup::OPositive => "O Positive (O+)",
            BloodGroup::ONegative => "O Negative (O-)",
        }
    }

    /// Identifier used on the wire and as `<select>` option value
    pub fn as_wire(self) -> &'static str {
        match self {
            BloodGroup::APositive => "A_pos",
            BloodGroup::ANegative => "A_neg",
            BloodGroup::BPositive => "B_pos",
            BloodGroup::BNegative => "B_neg",
            BloodGroup::AbPositive => "AB_pos",
            BloodGroup::AbNegative => "AB_neg",
            BloodGroup::OPositive => "O_pos",
            BloodGroup::ONegative => "O_neg",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BloodGroup {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BloodGroup::ALL
            .into_iter()
            .find(|group| group.as_wire() == value || group.label() == value)
            .ok_or_else(|| format!("Unknown blood group: {}", value))
    }
}

/// Donor lifecycle state. Payload fields only exist on their own variant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "WireStatus", into = "WireStatus")]
pub enum DonorStatus {
    Active,
    Appointed {
        appointment_date: Timestamp,
        patient_name: String,
    },
    TemporarilyRejected {
        available_date: Timestamp,
    },
    PermanentlyRejected,
}

impl DonorStatus {
    pub fn kind(&self) -> &'static str {
        match self {
            DonorStatus::Active => "active",
            DonorStatus::Appointed { .. } => "appointed",
            DonorStatus::TemporarilyRejected { .. } => "temporarilyRejected",
            DonorStatus::PermanentlyRejected => "permanentlyRejected",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct AppointmentPayload {
    appointment_date: Timestamp,
    patient_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct RejectionPayload {
    available_date: Timestamp,
}

/// `{"__kind__": "<variant>", "<variant>": payload}` as emitted by the generated bindings
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "__kind__", rename_all = "camelCase")]
enum WireStatus {
    Active {
        #[serde(default)]
        active: (),
    },
    Appointed {
        appointed: AppointmentPayload,
    },
    TemporarilyRejected {
        #[serde(rename = "temporarilyRejected")]
        temporarily_rejected: RejectionPayload,
    },
    PermanentlyRejected {
        #[serde(default, rename = "permanentlyRejected")]
        permanently_rejected: (),
    },
}

impl From<WireStatus> for DonorStatus {
    fn from(wire: WireStatus) -> Self {
        match wire {
            WireStatus::Active { .. } => DonorStatus::Active,
            WireStatus::Appointed { appointed } => DonorStatus::Appointed {
                appointment_date: appointed.appointment_date,
                patient_name: appointed.patient_name,
            },
            WireStatus::TemporarilyRejected {
                temporarily_rejected,
            } => DonorStatus::TemporarilyRejected {
                available_date: temporarily_rejected.available_date,
            },
            WireStatus::PermanentlyRejected { .. } => DonorStatus::PermanentlyRejected,
        }
    }
}

impl From<DonorStatus> for WireStatus {
    fn from(status: DonorStatus) -> Self {
        match status {
            DonorStatus::Active => WireStatus::Active { active: () },
            DonorStatus::Appointed {
                appointment_date,
                patient_name,
            } => WireStatus::Appointed {
                appointed: AppointmentPayload {
                    appointment_date,
                    patient_name,
                },
            },
            DonorStatus::TemporarilyRejected { available_date } => {
                WireStatus::TemporarilyRejected {
                    temporarily_rejected: RejectionPayload { available_date },
                }
            }
            DonorStatus::PermanentlyRejected => WireStatus::PermanentlyRejected {
                permanently_rejected: (),
            },
        }
    }
}

/// Donor record as returned by the service
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: DonorId,
    pub name: String,
    pub blood_group: BloodGroup,
    pub phone_number: String,
    pub status: DonorStatus,
    #[serde(default)]
    pub call_count: u64,
    #[serde(default, with = "tagged_option")]
    pub last_called_date: Option<Timestamp>,
}

/// Name, group and phone as submitted by the add and edit dialogs
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DonorDetails {
    pub name: String,
    pub blood_group: BloodGroup,
    pub phone_number: String,
}

/// Fallible RPC reply: `{"__kind__": "ok", "ok": v}` or `{"__kind__": "error", "error": msg}`
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "__kind__", rename_all = "lowercase")]
pub enum RpcResult<T> {
    Ok { ok: T },
    Error { error: String },
}

impl<T> RpcResult<T> {
    pub fn into_result(self) -> Result<T, String> {
        match self {
            RpcResult::Ok { ok } => Ok(ok),
            RpcResult::Error { error } => Err(error),
        }
    }
}

/// Optional values travel as `{"__kind__": "Some", "value": v}` / `{"__kind__": "None"}`
pub(crate) mod tagged_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    #[serde(tag = "__kind__")]
    enum TaggedRef<'a, T> {
        Some { value: &'a T },
        None,
    }

    #[derive(Deserialize)]
    #[serde(tag = "__kind__")]
    enum Tagged<T> {
        Some { value: T },
        None,
    }

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(value) => TaggedRef::Some { value }.serialize(serializer),
            None => TaggedRef::<T>::None.serialize(serializer),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        match Tagged::deserialize(deserializer)? {
            Tagged::Some { value } => Ok(Some(value)),
            Tagged::None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::{date, datetime};

    #[test]
    fn test_status_wire_shape() {
        let status = DonorStatus::Appointed {
            appointment_date: Timestamp(1_700_000_000_000_000_000),
            patient_name: "R. Silva".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            json!({
                "__kind__": "appointed",
                "appointed": {
                    "appointmentDate": 1_700_000_000_000_000_000i64,
                    "patientName": "R. Silva"
                }
            })
        );

        let permanent = serde_json::to_value(DonorStatus::PermanentlyRejected).unwrap();
        assert_eq!(
            permanent,
            json!({ "__kind__": "permanentlyRejected", "permanentlyRejected": null })
        );
    }

    #[test]
    fn test_donor_decodes_from_service_json() {
        let donor: Donor = serde_json::from_value(json!({
            "id": 7,
            "name": "Asha",
            "bloodGroup": "AB_neg",
            "phoneNumber": "+94 77 123 4567",
            "status": { "__kind__": "temporarilyRejected", "temporarilyRejected": { "availableDate": 42 } },
            "callCount": 3,
            "lastCalledDate": { "__kind__": "Some", "value": 99 }
        }))
        .unwrap();

        assert_eq!(donor.id, DonorId(7));
        assert_eq!(donor.blood_group, BloodGroup::AbNegative);
        assert_eq!(
            donor.status,
            DonorStatus::TemporarilyRejected {
                available_date: Timestamp(42)
            }
        );
        assert_eq!(donor.call_count, 3);
        assert_eq!(donor.last_called_date, Some(Timestamp(99)));
    }

    #[test]
    fn test_never_called_donor_decodes() {
        let donor: Donor = serde_json::from_value(json!({
            "id": 1,
            "name": "Nimal",
            "bloodGroup": "O_pos",
            "phoneNumber": "0771234567",
            "status": { "__kind__": "active", "active": null },
            "callCount": 0,
            "lastCalledDate": { "__kind__": "None" }
        }))
        .unwrap();
        assert_eq!(donor.status, DonorStatus::Active);
        assert_eq!(donor.last_called_date, None);
    }

    #[test]
    fn test_rpc_result_variants() {
        let ok: RpcResult<u64> = serde_json::from_value(json!({ "__kind__": "ok", "ok": 5 })).unwrap();
        assert_eq!(ok.into_result(), Ok(5));

        let err: RpcResult<()> =
            serde_json::from_value(json!({ "__kind__": "error", "error": "Donor not found" }))
                .unwrap();
        assert_eq!(err.into_result(), Err("Donor not found".to_string()));
    }

    #[test]
    fn test_blood_group_lookup() {
        assert_eq!("AB_pos".parse::<BloodGroup>(), Ok(BloodGroup::AbPositive));
        assert_eq!("O-".parse::<BloodGroup>(), Ok(BloodGroup::ONegative));
        assert!("C_pos".parse::<BloodGroup>().is_err());
        assert_eq!(BloodGroup::ONegative.precedence(), 7);
    }

    #[test]
    fn test_timestamp_day_arithmetic() {
        let start = Timestamp::from_date(date!(2026 - 01 - 01)).unwrap();
        assert_eq!(start.0, 1_767_225_600_000_000_000);

        let now = datetime!(2026-01-01 12:00 UTC);
        assert_eq!(start.plus_days(90).days_after(now), 90);
        assert_eq!(start.days_after(now), 0);
        assert_eq!(start.plus_days(-3).days_after(now), -3);
    }

    #[test]
    fn test_timestamp_range_limits() {
        assert!(Timestamp::from_date(date!(2262 - 04 - 11)).is_some());
        assert_eq!(Timestamp::from_date(date!(2262 - 04 - 12)), None);
        assert_eq!(Timestamp::from_date(date!(2300 - 01 - 01)), None);
        assert_eq!(Timestamp::from_date(date!(1600 - 01 - 01)), None);

        let late = Timestamp(i64::MAX - 1);
        assert_eq!(late.plus_days(1), Timestamp(i64::MAX));
        assert_eq!(Timestamp(i64::MIN + 1).plus_days(-1), Timestamp(i64::MIN));
    }
}
