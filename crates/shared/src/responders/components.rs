use crate::models::GeneratedComponent;

/// Documents served by `POST /api/generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    ImprovedChat,
    AdvancedApi,
    SelfImprovementEngine,
}

impl Component {
    /// Exact match on the request's `component` field.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "improved_chat" => Some(Self::ImprovedChat),
            "advanced_api" => Some(Self::AdvancedApi),
            "self_improvement_engine" => Some(Self::SelfImprovementEngine),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ImprovedChat => "improved_chat",
            Self::AdvancedApi => "advanced_api",
            Self::SelfImprovementEngine => "self_improvement_engine",
        }
    }

    pub fn document(self) -> GeneratedComponent {
        match self {
            Self::ImprovedChat => build_document(
                "improved_chat_interface",
                "2.0.0",
                &[
                    "real_time_collaboration",
                    "voice_integration",
                    "advanced_syntax_highlighting",
                    "plugin_system",
                    "auto_complete",
                    "mobile_responsive",
                ],
                IMPROVED_CHAT_CODE,
                &[
                    "Response quality: +65%",
                    "Processing speed: -75% latency",
                    "Memory efficiency: -45% usage",
                    "Feature completeness: +40%",
                ],
            ),
            Self::AdvancedApi => build_document(
                "advanced_api_server",
                "2.0.0",
                &[
                    "auto_scaling",
                    "advanced_caching",
                    "real_time_monitoring",
                    "load_balancing",
                    "self_optimization",
                    "comprehensive_logging",
                ],
                ADVANCED_API_CODE,
                &[
                    "Auto-scaling capabilities",
                    "Redis caching integration",
                    "Grafana monitoring dashboards",
                    "Load balancing algorithms",
                    "Self-optimization engine",
                ],
            ),
            Self::SelfImprovementEngine => build_document(
                "self_improvement_engine",
                "3.0.0",
                &[
                    "continuous_learning",
                    "automatic_optimization",
                    "performance_prediction",
                    "adaptive_scaling",
                    "intelligent_caching",
                    "real_time_analytics",
                ],
                SELF_IMPROVEMENT_ENGINE_CODE,
                &[
                    "Continuous learning algorithms",
                    "Automatic performance optimization",
                    "Predictive scaling capabilities",
                    "Adaptive caching strategies",
                    "Real-time analytics and reporting",
                    "Intelligent resource allocation",
                ],
            ),
        }
    }
}

fn build_document(
    component: &str,
    version: &str,
    features: &[&str],
    code: &str,
    improvements: &[&str],
) -> GeneratedComponent {
    GeneratedComponent {
        component: component.to_string(),
        version: version.to_string(),
        features: features.iter().map(|value| value.to_string()).collect(),
        code: code.to_string(),
        improvements: improvements.iter().map(|value| value.to_string()).collect(),
    }
}

const IMPROVED_CHAT_CODE: &str = r#"
class SelfImprovingChat {
    constructor() {
        this.features = [
            'real_time_collaboration',
            'voice_integration',
            'advanced_syntax_highlighting',
            'plugin_system'
        ];
        this.performanceMetrics = new Map();
    }

    async improveResponseQuality() {
        const analysis = await this.analyzeResponses();
        const improvements = await this.generateImprovements(analysis);
        return await this.deployImprovements(improvements);
    }

    async analyzeResponses() {
        return {
            averageResponseTime: '167ms',
            userSatisfaction: 4.8,
            improvementPotential: 'high'
        };
    }
}
"#;

const ADVANCED_API_CODE: &str = r#"
class AdvancedAPIServer:
    def __init__(self):
        self.self_improvement_engine = True
        self.auto_optimization = True
        self.performance_monitor = True
        self.version = "2.0.0"

    async def generate_improvements(self):
        analysis = await self.analyze_performance()
        improvements = await self.create_improvements(analysis)
        await self.deploy_improvements(improvements)

        return {
            "improvements_generated": len(improvements),
            "performance_impact": "+75%",
            "deployment_status": "success"
        }

    async def analyze_performance(self):
        return {
            "response_time": "167ms",
            "memory_usage": "45MB",
            "cpu_utilization": "23%",
            "optimization_potential": "high"
        }
"#;

const SELF_IMPROVEMENT_ENGINE_CODE: &str = r#"
class SelfImprovementEngine:
    def __init__(self):
        self.learning_rate = 0.001
        self.optimization_targets = [
            "response_quality",
            "processing_speed",
            "memory_efficiency",
            "feature_completeness"
        ]
        self.improvement_history = []

    async def continuous_improvement_loop(self):
        while True:
            current_metrics = await self.analyze_current_state()
            opportunities = await self.identify_opportunities(current_metrics)
            improvements = await self.generate_improvements(opportunities)
            test_results = await self.test_improvements(improvements)

            if test_results["success"]:
                await self.deploy_improvements(improvements)
                self.improvement_history.append({
                    "timestamp": datetime.now(),
                    "improvements": improvements,
                    "impact": test_results["impact"]
                })

            await asyncio.sleep(3600)

    async def identify_opportunities(self, metrics):
        opportunities = []

        if metrics["processing_speed"] > 150:
            opportunities.append({
                "type": "speed_optimization",
                "potential_impact": "-40% latency",
                "complexity": "medium"
            })

        if metrics["memory_usage"] > 40:
            opportunities.append({
                "type": "memory_optimization",
                "potential_impact": "-25% usage",
                "complexity": "low"
            })

        return opportunities
"#;
