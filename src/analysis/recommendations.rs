use crate::domain::{ConsumptionInsights, Priority, Recommendation};

const NIGHT_WASTE_HIGH_PCT: f64 = 15.0;
const NIGHT_WASTE_MEDIUM_PCT: f64 = 8.0;
const OFF_HOURS_HIGH_PCT: f64 = 40.0;

/// Build recommendations from analysis insights.
///
/// Rules run in a fixed order and the output keeps that order. The
/// department rule always fires, so the result is never empty.
pub fn recommend(insights: &ConsumptionInsights) -> Vec<Recommendation> {
    let mut recommendations = Vec::with_capacity(3);
    let night = insights.night_waste_pct;

    if night > NIGHT_WASTE_HIGH_PCT {
        recommendations.push(Recommendation {
            priority: Priority::High,
            title: "Night Shutdown Automation".to_string(),
            description: format!(
                "Night waste of {night}% detected. Deploy automatic shutdown of idle equipment."
            ),
            estimated_savings: format!("{:.1}% of total consumption", night * 0.8),
        });
    } else if night > NIGHT_WASTE_MEDIUM_PCT {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            title: "Off-Hours Equipment Review".to_string(),
            description: format!(
                "Night consumption of {night}%. Review equipment left running overnight."
            ),
            estimated_savings: format!("{:.1}% of total consumption", night * 0.6),
        });
    }

    if insights.off_hours_pct > OFF_HOURS_HIGH_PCT {
        recommendations.push(Recommendation {
            priority: Priority::High,
            title: "Business-Hours Usage Policy".to_string(),
            description: format!(
                "High consumption ({}%) outside business hours. Review usage policies.",
                insights.off_hours_pct
            ),
            estimated_savings: "15-25% of total consumption".to_string(),
        });
    }

    let department = insights.highest_consumption_department;
    recommendations.push(Recommendation {
        priority: Priority::Low,
        title: format!("{department} Department Optimization"),
        description: format!(
            "{department} has the highest average consumption. Audit its equipment and processes."
        ),
        estimated_savings: "5-15% of departmental consumption".to_string(),
    });

    recommendations
}
